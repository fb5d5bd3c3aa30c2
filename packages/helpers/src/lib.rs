pub mod answer;
pub mod testing;
