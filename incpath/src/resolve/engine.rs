//! The worklist-driven resolution engine.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::error::Result;
use crate::index::FilenameIndex;
use crate::path::{normalize, CanonicalPath};
use crate::resolve::aggregate::ResultAggregator;
use crate::resolve::settings::ResolverSettings;
use crate::resolve::types::{IncludeLocation, ResolutionResult};
use crate::scan::{enumerate, scan, Directive};

/// Progress of a run, reported once per file as it starts being scanned.
///
/// `total` is the size of the frontier at that moment and can grow between
/// reports as includes resolve to files not seen before.
#[derive(Debug, Clone, Copy)]
pub struct ScanProgress<'a> {
    /// 1-based position of the file in the frontier.
    pub current: usize,
    /// Files known so far, including `current`.
    pub total: usize,
    /// The file about to be scanned.
    pub file: &'a CanonicalPath,
}

impl fmt::Display for ScanProgress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}] {}", self.current, self.total, self.file)
    }
}

/// State of a single resolution run.
///
/// Created from [`ResolverSettings`], which validates the configured folders,
/// indexes the resolve universe and seeds the frontier with the files to
/// parse. [`ResolutionEngine::run`] then drains the frontier.
///
/// # Examples
///
/// ```no_run
/// use incpath::{ResolutionEngine, ResolverSettings};
///
/// let settings = ResolverSettings::new()
///     .with_parse_folder("src")
///     .with_resolve_folder("/opt/vendor");
/// let result = ResolutionEngine::new(&settings)
///     .unwrap()
///     .run_with_progress(|progress| eprintln!("{progress}"))
///     .unwrap();
/// for folder in &result.search_folders {
///     println!("-I{folder}");
/// }
/// ```
#[derive(Debug)]
pub struct ResolutionEngine {
    index: FilenameIndex,
    trusted_folders: BTreeSet<CanonicalPath>,
    frontier: Vec<CanonicalPath>,
    seen: HashSet<CanonicalPath>,
    aggregator: ResultAggregator,
}

impl ResolutionEngine {
    /// Validate the configured folders and prepare the initial frontier.
    ///
    /// Missing folders of any of the three lists are recorded as invalid
    /// paths rather than failing.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing tree cannot be walked.
    pub fn new(settings: &ResolverSettings) -> Result<Self> {
        let mut aggregator = ResultAggregator::new();

        let mut trusted_folders = BTreeSet::new();
        for folder in &settings.include_folders {
            match normalize(folder) {
                Ok(canonical) if canonical.as_path().is_dir() => {
                    trusted_folders.insert(canonical.clone());
                    aggregator.settle_folder(canonical);
                }
                _ => {
                    log::warn!("Include folder {} does not exist", folder.display());
                    aggregator.record_invalid_path(folder.clone());
                }
            }
        }

        let universe = enumerate(&settings.resolve_folders)?;
        for root in universe.invalid_roots {
            log::warn!("Resolve folder {} does not exist", root.display());
            aggregator.record_invalid_path(root);
        }
        let index = FilenameIndex::build(universe.files);
        log::debug!("Indexed {} candidate files", index.len());

        let to_parse = enumerate(&settings.parse_folders)?;
        for root in to_parse.invalid_roots {
            log::warn!("Parse folder {} does not exist", root.display());
            aggregator.record_invalid_path(root);
        }

        let mut engine = Self {
            index,
            trusted_folders,
            frontier: Vec::with_capacity(to_parse.files.len()),
            seen: HashSet::new(),
            aggregator,
        };
        for file in to_parse.files {
            engine.enqueue(file);
        }
        log::debug!("Initial frontier holds {} files", engine.frontier.len());

        Ok(engine)
    }

    /// Number of files currently known to the frontier, scanned or not.
    #[must_use]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Drain the frontier and return the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a discovered file cannot be read.
    pub fn run(self) -> Result<ResolutionResult> {
        self.run_with_progress(|_| {})
    }

    /// Drain the frontier, calling `progress` before each file is scanned.
    ///
    /// # Errors
    ///
    /// Returns an error if a discovered file cannot be read.
    pub fn run_with_progress<F>(mut self, mut progress: F) -> Result<ResolutionResult>
    where
        F: FnMut(&ScanProgress<'_>),
    {
        // Files appended while draining are visited later in this same loop.
        let mut cursor = 0;
        while cursor < self.frontier.len() {
            let file = self.frontier[cursor].clone();
            cursor += 1;

            progress(&ScanProgress {
                current: cursor,
                total: self.frontier.len(),
                file: &file,
            });
            self.scan_file(&file)?;
        }

        log::debug!("Scanned {cursor} files");
        Ok(self.aggregator.finish())
    }

    fn scan_file(&mut self, file: &CanonicalPath) -> Result<()> {
        for directive in scan(file.as_path())? {
            self.classify(file, directive?)?;
        }
        Ok(())
    }

    /// Route one directive through the resolution policy.
    fn classify(&mut self, file: &CanonicalPath, directive: Directive) -> Result<()> {
        let Directive { line, text } = directive;

        // Relative to the including file's own directory.
        if let Some(dir) = file.parent() {
            let local = dir.join(&text);
            if local.is_file() {
                let local = normalize(&local)?;
                self.enqueue(local);
                return Ok(());
            }
        }

        let location = IncludeLocation::new(file.clone(), line);

        if self.aggregator.add_conflict_location(&text, &location) {
            return Ok(());
        }

        let mut candidates = self.index.find_candidate_folders(&text);
        if candidates.len() == 1 {
            if let Some((folder, resolved)) = candidates.pop_first() {
                log::debug!("{location}: '{text}' resolved through {folder}");
                self.aggregator.settle_folder(folder);
                self.enqueue(resolved);
                return Ok(());
            }
        }
        if candidates.len() > 1 {
            log::debug!(
                "{location}: '{text}' is ambiguous across {} folders",
                candidates.len()
            );
            let mut folders = BTreeSet::new();
            for (folder, resolved) in candidates {
                self.enqueue(resolved);
                folders.insert(folder);
            }
            self.aggregator.record_conflict(text, location, folders);
            return Ok(());
        }

        if let Some(found) = self.find_in_trusted_folders(&text)? {
            self.enqueue(found);
            return Ok(());
        }

        log::debug!("{location}: '{text}' is unresolved");
        self.aggregator.record_unresolved(location, text);
        Ok(())
    }

    /// Look for `include` directly under one of the configured include folders.
    fn find_in_trusted_folders(&self, include: &str) -> Result<Option<CanonicalPath>> {
        for folder in &self.trusted_folders {
            let candidate = folder.as_path().join(include);
            if candidate.is_file() {
                return normalize(&candidate).map(Some);
            }
        }
        Ok(None)
    }

    /// Append `file` to the frontier unless it was queued before.
    fn enqueue(&mut self, file: CanonicalPath) -> bool {
        if self.seen.contains(&file) {
            return false;
        }
        self.seen.insert(file.clone());
        self.frontier.push(file);
        true
    }
}

/// Run a full resolution for `settings`.
///
/// # Errors
///
/// Returns an error if a tree cannot be walked or a discovered file cannot be
/// read.
///
/// # Examples
///
/// ```no_run
/// use incpath::{resolve, ResolverSettings};
///
/// let result = resolve(&ResolverSettings::new().with_parse_folder("src")).unwrap();
/// for unresolved in &result.unresolved {
///     println!("{unresolved}");
/// }
/// ```
pub fn resolve(settings: &ResolverSettings) -> Result<ResolutionResult> {
    ResolutionEngine::new(settings)?.run()
}

/// Run a full resolution for `settings`, reporting progress per file.
///
/// # Errors
///
/// Returns an error if a tree cannot be walked or a discovered file cannot be
/// read.
pub fn resolve_with_progress<F>(settings: &ResolverSettings, progress: F) -> Result<ResolutionResult>
where
    F: FnMut(&ScanProgress<'_>),
{
    ResolutionEngine::new(settings)?.run_with_progress(progress)
}
