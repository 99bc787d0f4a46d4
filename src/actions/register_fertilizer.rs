use crate::FertilizerMod;

impl FertilizerMod {
    pub fn register_fertilizer_family(&mut self, tiers: [String; 3]) {
        self.fertilizing.register_family(tiers);
    }
}
