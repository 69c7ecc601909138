use crate::camara::Deputado;

/// Identifies one issued search so late responses can be told apart from
/// current ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(u64);

/// Search screen state with explicit transitions. Results are replaced
/// wholesale on success and kept as-is on failure; only the latest issued
/// request may apply its outcome, so a slow older response cannot
/// overwrite a newer one.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub deputados: Vec<Deputado>,
    pub loading: bool,
    latest_request: u64,
}

impl SearchState {
    /// The screen mounts straight into the automatic first fetch, so the
    /// initial state is already loading.
    pub fn new() -> Self {
        Self {
            deputados: Vec::new(),
            loading: true,
            latest_request: 0,
        }
    }

    /// Register a new outstanding request and enter the loading state.
    pub fn start_search(&mut self) -> RequestId {
        self.latest_request += 1;
        self.loading = true;
        RequestId(self.latest_request)
    }

    /// Replace the result set with a successful response, unless a newer
    /// search has been issued since.
    pub fn search_succeeded(&mut self, request: RequestId, deputados: Vec<Deputado>) {
        if !self.is_latest(request) {
            return;
        }
        self.deputados = deputados;
        self.loading = false;
    }

    /// Record a failed fetch: the previous results stay visible and the
    /// loading indicator is cleared.
    pub fn search_failed(&mut self, request: RequestId) {
        if !self.is_latest(request) {
            return;
        }
        self.loading = false;
    }

    fn is_latest(&self, request: RequestId) -> bool {
        request.0 == self.latest_request
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}
