/// Fixed set of source images, viewed cyclically to fill any slot count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gallery {
    sources: Vec<String>,
}

impl Gallery {
    pub fn new<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sources: Vec<String> = sources
            .into_iter()
            .map(Into::into)
            .filter(|s: &String| !s.trim().is_empty())
            .collect();
        if sources.is_empty() {
            log::warn!("[gallery] no photos supplied; the galaxy will be empty");
        }
        Self { sources }
    }

    /// Parse a comma-separated manifest (e.g. a `data-photos` attribute).
    pub fn from_manifest(manifest: &str) -> Self {
        Self::new(manifest.split(',').map(str::trim))
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Index of the source image backing slot `index`.
    pub fn source_index(&self, index: usize) -> Option<usize> {
        (!self.is_empty()).then(|| index % self.sources.len())
    }

    pub fn url_for(&self, index: usize) -> Option<&str> {
        self.source_index(index).map(|i| self.sources[i].as_str())
    }

    /// Number of cards the gallery can fill: `count`, or zero when empty.
    pub fn fillable(&self, count: usize) -> usize {
        if self.is_empty() {
            0
        } else {
            count
        }
    }

    /// Round-robin view of `count` slots.
    pub fn slots(&self, count: usize) -> impl Iterator<Item = &str> + '_ {
        (0..self.fillable(count)).filter_map(move |i| self.url_for(i))
    }
}
