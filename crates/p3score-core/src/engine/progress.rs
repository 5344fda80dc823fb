/// Events emitted while a batch of ligands is being predicted.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    /// A workflow phase begins ("Ligand Profiling", "Scoring").
    PhaseStart { name: &'static str },
    PhaseFinish,

    /// The number of ligands about to be profiled.
    LigandsQueued { total: u64 },
    /// One ligand's structural profile is complete. Under the `parallel`
    /// feature these arrive in completion order, not ligand order.
    LigandProfiled { name: String },
    LigandsDone,

    /// A degraded-input notice about a single ligand, worth showing to the user.
    Notice(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional callback.
///
/// Must be shareable across worker threads, as ligands are profiled in
/// parallel and each reports its own completion.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
