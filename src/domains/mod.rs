pub mod fertilizing;
