//! One function per percentile definition

pub mod empirical;
pub mod tukey;
pub mod weighted_average;

pub use empirical::{aempirical, empirical, round_nearest};
pub use tukey::{hinges_sorted, tukey};
pub use weighted_average::{haverage, waverage};
