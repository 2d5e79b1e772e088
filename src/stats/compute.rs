use std::collections::HashMap;
use std::fmt;

use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::StatsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Mean,
    Median,
    Mode,
}

/// Result of a statistic: one number, or the tie set for a multi-modal input.
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    Single(f64),
    Multiple(Vec<f64>),
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Mean, Operation::Median, Operation::Mode];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Mean => "mean",
            Operation::Median => "median",
            Operation::Mode => "mode",
        }
    }

    pub fn compute(&self, nums: &[f64]) -> Result<StatValue, StatsError> {
        match self {
            Operation::Mean => mean(nums).map(StatValue::Single),
            Operation::Median => median(nums).map(StatValue::Single),
            Operation::Mode => mode(nums),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn mean(nums: &[f64]) -> Result<f64, StatsError> {
    if nums.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let sum = nums.iter().fold(0.0, |acc, &x| acc + x);
    Ok(sum / nums.len() as f64)
}

pub fn median(nums: &[f64]) -> Result<f64, StatsError> {
    if nums.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut sorted = nums.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Single pass over `nums` tracking the running maximum frequency.
///
/// A value joins the tie list the moment its count reaches the current
/// maximum, and the list restarts whenever a count exceeds it, so ties come
/// back in the order they reached the final frequency during the scan.
/// Keys compare by numeric value: `-0.0` and `0.0` are counted together.
pub fn mode(nums: &[f64]) -> Result<StatValue, StatsError> {
    if nums.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut freq: HashMap<OrderedFloat<f64>, usize> = HashMap::with_capacity(nums.len());
    let mut max_freq = 0;
    let mut modes = Vec::new();

    for &num in nums {
        let count = freq.entry(OrderedFloat(num)).or_insert(0);
        *count += 1;

        if *count > max_freq {
            max_freq = *count;
            modes.clear();
            modes.push(num);
        } else if *count == max_freq {
            modes.push(num);
        }
    }

    if modes.len() == 1 {
        Ok(StatValue::Single(modes[0]))
    } else {
        Ok(StatValue::Multiple(modes))
    }
}
