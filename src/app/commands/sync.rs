//! Fetch missing generators, persist them, and regenerate the index.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use chrono::Utc;

use crate::app::AppContext;
use crate::app::commands::index;
use crate::domain::{AppError, FetchPlan, FetchRequest, GeneratorArtifact, GeneratorName, plan};
use crate::ports::{ArtifactStore, GeneratorClient, IndexFormatter, SessionToken};

/// Inputs for a sync run.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub session: SessionToken,
    /// Generators that must be present after the run. Duplicates are allowed.
    pub names: Vec<GeneratorName>,
    /// Re-fetch names that already exist in the store.
    pub force: bool,
    /// Forwarded to the server untouched.
    pub last_known_edit_time: BTreeMap<GeneratorName, i64>,
}

impl SyncOptions {
    pub fn new(session: SessionToken, names: Vec<GeneratorName>) -> Self {
        Self { session, names, force: false, last_known_edit_time: BTreeMap::new() }
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// States of a sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Idle,
    Planning,
    ShortCircuit,
    Fetching,
    Persisting,
    Indexing,
    Done,
    Failed,
}

impl SyncPhase {
    pub fn can_transition_to(self, next: SyncPhase) -> bool {
        use SyncPhase::*;
        matches!(
            (self, next),
            (Idle, Planning)
                | (Planning, ShortCircuit)
                | (Planning, Fetching)
                | (ShortCircuit, Done)
                | (Fetching, Persisting)
                | (Persisting, Indexing)
                | (Indexing, Done)
                | (Planning | Fetching | Persisting | Indexing, Failed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, SyncPhase::Done | SyncPhase::Failed)
    }
}

impl fmt::Display for SyncPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SyncPhase::Idle => "idle",
            SyncPhase::Planning => "planning",
            SyncPhase::ShortCircuit => "short-circuit",
            SyncPhase::Fetching => "fetching",
            SyncPhase::Persisting => "persisting",
            SyncPhase::Indexing => "indexing",
            SyncPhase::Done => "done",
            SyncPhase::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Ordered record of the phases a run passed through.
#[derive(Debug, Clone)]
pub struct PhaseTrace {
    phases: Vec<SyncPhase>,
}

impl Default for PhaseTrace {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseTrace {
    pub fn new() -> Self {
        Self { phases: vec![SyncPhase::Idle] }
    }

    pub fn phases(&self) -> &[SyncPhase] {
        &self.phases
    }

    pub fn current(&self) -> SyncPhase {
        *self.phases.last().unwrap_or(&SyncPhase::Idle)
    }

    fn advance(&mut self, next: SyncPhase) {
        debug_assert!(
            self.current().can_transition_to(next),
            "illegal sync transition {} -> {}",
            self.current(),
            next
        );
        self.phases.push(next);
    }
}

/// Summary of a completed sync run.
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    pub phases: Vec<SyncPhase>,
    pub plan: FetchPlan,
    /// Artifacts written this run, including server-added dependencies.
    pub written: Vec<GeneratorName>,
    /// Planned names the server did not return.
    pub missing: Vec<GeneratorName>,
    pub index_path: Option<PathBuf>,
    pub index_entries: usize,
}

impl SyncOutcome {
    /// True when nothing needed fetching and the store was left untouched.
    pub fn short_circuited(&self) -> bool {
        self.phases.contains(&SyncPhase::ShortCircuit)
    }
}

/// Run the sync pipeline.
pub fn execute<S, F, C>(
    ctx: &AppContext<S, F>,
    client: &C,
    options: &SyncOptions,
) -> Result<SyncOutcome, AppError>
where
    S: ArtifactStore,
    F: IndexFormatter,
    C: GeneratorClient + ?Sized,
{
    execute_traced(ctx, client, options, &mut PhaseTrace::new())
}

/// Run the sync pipeline, recording every phase into `trace`.
///
/// On error the trace ends in [`SyncPhase::Failed`], preceded by the phase that failed.
pub fn execute_traced<S, F, C>(
    ctx: &AppContext<S, F>,
    client: &C,
    options: &SyncOptions,
    trace: &mut PhaseTrace,
) -> Result<SyncOutcome, AppError>
where
    S: ArtifactStore,
    F: IndexFormatter,
    C: GeneratorClient + ?Sized,
{
    match run_pipeline(ctx, client, options, trace) {
        Ok(outcome) => Ok(outcome),
        Err(err) => {
            let phase = trace.current();
            trace.advance(SyncPhase::Failed);
            eprintln!("❌ Sync failed while {}", phase);
            Err(err)
        }
    }
}

fn run_pipeline<S, F, C>(
    ctx: &AppContext<S, F>,
    client: &C,
    options: &SyncOptions,
    trace: &mut PhaseTrace,
) -> Result<SyncOutcome, AppError>
where
    S: ArtifactStore,
    F: IndexFormatter,
    C: GeneratorClient + ?Sized,
{
    trace.advance(SyncPhase::Planning);
    let existing = ctx.store().list()?;
    let fetch_plan = plan(&options.names, &existing, options.force);

    if !fetch_plan.skipped.is_empty() {
        println!(
            "Skipping {} generator(s) that already exist (use -f/--force to override)",
            fetch_plan.skipped.len()
        );
    }

    if fetch_plan.is_empty() {
        trace.advance(SyncPhase::ShortCircuit);
        println!("All generators already exist. Use -f/--force to re-download them.");
        trace.advance(SyncPhase::Done);
        return Ok(SyncOutcome {
            phases: trace.phases.clone(),
            plan: fetch_plan,
            written: Vec::new(),
            missing: Vec::new(),
            index_path: None,
            index_entries: existing.len(),
        });
    }

    trace.advance(SyncPhase::Fetching);
    println!("Fetching {} generator(s)...", fetch_plan.to_fetch.len());
    let request = FetchRequest::new(fetch_plan.to_fetch.clone())
        .with_edit_times(options.last_known_edit_time.clone());
    let fetched = client.fetch(&request, &options.session)?;

    let missing: Vec<GeneratorName> =
        fetch_plan.to_fetch.iter().filter(|name| !fetched.contains_key(*name)).cloned().collect();
    if !missing.is_empty() {
        let list = missing.iter().map(|n| n.as_str()).collect::<Vec<_>>().join(", ");
        eprintln!("⚠️  Server did not return {} generator(s): {}", missing.len(), list);
    }

    trace.advance(SyncPhase::Persisting);
    let fetched_at = Utc::now();
    let mut written = Vec::with_capacity(fetched.len());
    for (name, body) in fetched {
        let source_url = ctx.config().remote.source_url(&name);
        let artifact = GeneratorArtifact::new(name, body, source_url, fetched_at);
        let path = ctx.store().write(&artifact)?;
        println!("Saved {}", path.display());
        written.push(artifact.name);
    }

    trace.advance(SyncPhase::Indexing);
    let index = index::execute(ctx)?;
    println!("Generated {}", index.path.display());

    trace.advance(SyncPhase::Done);
    Ok(SyncOutcome {
        phases: trace.phases.clone(),
        plan: fetch_plan,
        written,
        missing,
        index_path: Some(index.path),
        index_entries: index.entries,
    })
}
