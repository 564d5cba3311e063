use std::fmt::{self, Display};

use crate::models::ModuleExtent;
use crate::utils::format_proportion;

/// Share of the differential-gene rows that fall in a module.
#[derive(PartialEq, PartialOrd, Debug, Clone, Copy)]
pub struct Proportion(pub f64);

impl Display for Proportion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_proportion(self.0))
    }
}

///
/// One histogram bar spanning a whole module.
///
#[derive(PartialEq, Debug, Clone)]
pub struct HistogramEntry<V> {
    pub module_id: String,
    pub start: u32,
    pub end: u32,
    pub value: V,
}

pub type CountEntry = HistogramEntry<usize>;
pub type ProportionEntry = HistogramEntry<Proportion>;

impl<V> HistogramEntry<V> {
    pub fn new(extent: &ModuleExtent, value: V) -> Self {
        HistogramEntry {
            module_id: extent.module_id.clone(),
            start: extent.start,
            end: extent.end,
            value,
        }
    }
}

impl<V: Display> Display for HistogramEntry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.module_id, self.start, self.end, self.value
        )
    }
}
