//! Experiment configuration.

/// Solver variants an experiment compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Randomized construction followed by local search.
    Local,
    /// Randomized construction only.
    NoLocal,
}

impl Method {
    /// Stable label used in result tables.
    pub fn label(self) -> &'static str {
        match self {
            Method::Local => "local",
            Method::NoLocal => "no_local",
        }
    }
}

/// Parses a method selector: `local`, `no_local`, or `both`.
///
/// # Example
///
/// ```
/// use deskplan_benchmark::{parse_methods, Method};
///
/// assert_eq!(parse_methods("both").unwrap(), vec![Method::Local, Method::NoLocal]);
/// assert!(parse_methods("fastest").is_err());
/// ```
pub fn parse_methods(text: &str) -> Result<Vec<Method>, String> {
    match text {
        "local" => Ok(vec![Method::Local]),
        "no_local" => Ok(vec![Method::NoLocal]),
        "both" => Ok(vec![Method::Local, Method::NoLocal]),
        other => Err(format!(
            "unknown method '{other}' (expected local, no_local, or both)"
        )),
    }
}

/// The seeds an experiment runs each method with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSpec {
    /// An explicit list of seeds, run in order.
    List(Vec<u64>),
    /// `count` consecutive seeds starting at `start`.
    Range { start: u64, count: u64 },
}

impl SeedSpec {
    /// Materializes the seeds in run order.
    pub fn seeds(&self) -> Vec<u64> {
        match self {
            SeedSpec::List(seeds) => seeds.clone(),
            SeedSpec::Range { start, count } => (*start..start + count).collect(),
        }
    }
}

impl Default for SeedSpec {
    fn default() -> Self {
        SeedSpec::Range { start: 1, count: 5 }
    }
}

/// Configuration for an experiment run.
///
/// Defaults compare both methods over seeds 1 through 5 with 1000 local
/// search iterations and a candidate window of 3.
///
/// # Example
///
/// ```
/// use deskplan_benchmark::{ExperimentPlan, Method, SeedSpec};
///
/// let plan = ExperimentPlan::new()
///     .with_seeds(SeedSpec::Range { start: 10, count: 4 })
///     .with_top_k(5);
///
/// assert_eq!(plan.seeds(), vec![10, 11, 12, 13]);
/// assert_eq!(plan.runs_per_instance(), 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentPlan {
    methods: Vec<Method>,
    seeds: SeedSpec,
    iterations: u64,
    top_k: usize,
}

impl ExperimentPlan {
    /// Creates a plan with the defaults.
    pub fn new() -> Self {
        ExperimentPlan {
            methods: vec![Method::Local, Method::NoLocal],
            seeds: SeedSpec::default(),
            iterations: 1000,
            top_k: 3,
        }
    }

    /// Sets the methods to compare.
    pub fn with_methods(mut self, methods: Vec<Method>) -> Self {
        self.methods = methods;
        self
    }

    /// Sets the seeds each method runs with.
    pub fn with_seeds(mut self, seeds: SeedSpec) -> Self {
        self.seeds = seeds;
        self
    }

    /// Sets the local search iterations for the `local` method.
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the construction candidate window.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Methods in run order.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Seeds in run order.
    pub fn seeds(&self) -> Vec<u64> {
        self.seeds.seeds()
    }

    /// Local search iterations for the `local` method.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Construction candidate window.
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Number of runs the plan schedules per instance.
    pub fn runs_per_instance(&self) -> usize {
        self.methods.len() * self.seeds.seeds().len()
    }
}

impl Default for ExperimentPlan {
    fn default() -> Self {
        Self::new()
    }
}
