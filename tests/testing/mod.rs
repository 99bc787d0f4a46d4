#![allow(dead_code)]

use std::collections::HashMap;

use ultimate_fertilizer::api::{ActionError, Event};
use ultimate_fertilizer::config::{FertilizerConfig, FertilizerMode};
use ultimate_fertilizer::fertilizing::{CropState, FertilizingError, Plot, PlotId};
use ultimate_fertilizer::FertilizerMod;

pub fn config(mode: FertilizerMode) -> FertilizerConfig {
    FertilizerConfig {
        fertilizer_mode: mode,
        ..FertilizerConfig::default()
    }
}

pub fn crop(current_phase: i32, day_of_current_phase: i32, regrow_days: Option<i32>) -> CropState {
    CropState {
        current_phase,
        day_of_current_phase,
        regrow_days,
    }
}

pub struct FertilizingTestScenario {
    fertilizer: FertilizerMod,
    plots: HashMap<String, PlotId>,
    current_action_result: Result<Vec<Event>, ActionError>,
}

impl FertilizingTestScenario {
    pub fn new(config: FertilizerConfig) -> Self {
        Self {
            fertilizer: FertilizerMod::new(config),
            plots: Default::default(),
            current_action_result: Err(ActionError::Test),
        }
    }

    pub fn plot(&self, name: &str) -> PlotId {
        *self.plots.get(name).unwrap()
    }

    pub fn given_plot(mut self, name: &str) -> Self {
        let id = self.fertilizer.hoe_plot().unwrap();
        self.plots.insert(name.to_string(), id);
        self
    }

    /// Loads a plot from its saved delimited string, the way the host save
    /// system would restore it.
    pub fn given_fertilizers(mut self, name: &str, value: &str) -> Self {
        let id = PlotId(self.fertilizer.fertilizing.plots_sequence + 1);
        let plot = Plot::from_save(id, value);
        self.fertilizer.fertilizing.load_plots(vec![plot], id.0);
        self.plots.insert(name.to_string(), id);
        self
    }

    pub fn given_family(mut self, tiers: [&str; 3]) -> Self {
        self.fertilizer
            .register_fertilizer_family(tiers.map(String::from));
        self
    }

    pub fn when_reload_config(mut self, config: FertilizerConfig) -> Self {
        self.fertilizer.reload_config(config);
        self
    }

    pub fn when_apply_fertilizer(mut self, name: &str, item: &str) -> Self {
        let plot = self.plot(name);
        self.current_action_result = self.fertilizer.apply_fertilizer(plot, item, None);
        self
    }

    pub fn when_apply_fertilizer_with_crop(
        mut self,
        name: &str,
        item: &str,
        crop: CropState,
    ) -> Self {
        let plot = self.plot(name);
        self.current_action_result = self.fertilizer.apply_fertilizer(plot, item, Some(crop));
        self
    }

    pub fn when_apply_on_unknown_plot(mut self, item: &str) -> Self {
        self.current_action_result = self
            .fertilizer
            .apply_fertilizer(PlotId(4096), item, None);
        self
    }

    pub fn when_harvest_crop(mut self, name: &str, crop: CropState) -> Self {
        let plot = self.plot(name);
        self.current_action_result = self.fertilizer.harvest_crop(plot, crop);
        self
    }

    pub fn when_season_update(mut self, name: &str, on_load: bool) -> Self {
        let plot = self.plot(name);
        self.current_action_result = self.fertilizer.season_update(plot, on_load);
        self
    }

    pub fn then_fertilizers(self, name: &str, expected: &str) -> Self {
        let plot = self.fertilizer.fertilizing.get_plot(self.plot(name)).unwrap();
        assert_eq!(plot.to_save(), expected);
        self
    }

    pub fn then_fertilizer_present(self, name: &str, item: &str, expected: bool) -> Self {
        let present = self.fertilizer.is_fertilizer_present(self.plot(name), item);
        assert_eq!(present, expected, "presence of {}", item);
        self
    }

    pub fn then_events<F>(self, events: F) -> Self
    where
        F: FnOnce(&Self) -> Vec<Event>,
    {
        let expected = events(&self);
        match &self.current_action_result {
            Ok(actual) => assert_eq!(actual, &expected),
            Err(error) => panic!("expected events, got error {:?}", error),
        }
        self
    }

    pub fn then_error<F>(self, error: F) -> Self
    where
        F: FnOnce(&Self) -> FertilizingError,
    {
        let expected = ActionError::Fertilizing(error(&self));
        match &self.current_action_result {
            Ok(events) => panic!("expected {:?}, got events {:?}", expected, events),
            Err(actual) => assert_eq!(actual, &expected),
        }
        self
    }

    pub fn then_speed_boost(self, name: &str, expected: f32) -> Self {
        let boost = self
            .fertilizer
            .fertilizing
            .get_speed_boost(&self.fertilizer.config, self.plot(name))
            .unwrap();
        assert!((boost - expected).abs() < 1e-6, "speed boost {}", boost);
        self
    }

    pub fn then_quality_level(self, name: &str, expected: i32) -> Self {
        let level = self
            .fertilizer
            .fertilizing
            .get_quality_level(&self.fertilizer.config, self.plot(name))
            .unwrap();
        assert_eq!(level, expected);
        self
    }

    pub fn then_water_retention(self, name: &str, expected: f32) -> Self {
        let chance = self
            .fertilizer
            .fertilizing
            .get_water_retention(&self.fertilizer.config, self.plot(name))
            .unwrap();
        assert!((chance - expected).abs() < 1e-6, "retention {}", chance);
        self
    }

    pub fn then_sprites<F>(self, name: &str, check: F) -> Self
    where
        F: FnOnce(Vec<ultimate_fertilizer::view::FertilizerSprite>),
    {
        let sprites = self.fertilizer.look_at_plot(self.plot(name)).unwrap();
        check(sprites);
        self
    }
}
