mod exercise;
mod practice;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use exercise::ExerciseCard;
pub use practice::PracticeView;
pub use state::ViewError;
