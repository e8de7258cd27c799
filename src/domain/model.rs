use serde::{Deserialize, Serialize};

/// A declared array read from the input stream.
///
/// Only the reading side builds one, after it has read exactly the declared
/// number of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSpec {
    pub values: Vec<i64>,
}

impl InputSpec {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Sorted,
    Unsorted,
}

impl Verdict {
    pub fn from_sorted(sorted: bool) -> Self {
        if sorted {
            Verdict::Sorted
        } else {
            Verdict::Unsorted
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Verdict::Sorted => "The array is sorted",
            Verdict::Unsorted => "Array is unsorted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub size: usize,
    pub sorted: bool,
    pub first_inversion: Option<usize>,
    pub message: String,
}

impl CheckReport {
    pub fn new(size: usize, first_inversion: Option<usize>) -> Self {
        let verdict = Verdict::from_sorted(first_inversion.is_none());
        Self {
            size,
            sorted: verdict == Verdict::Sorted,
            first_inversion,
            message: verdict.message().to_string(),
        }
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_sorted(self.sorted)
    }
}
