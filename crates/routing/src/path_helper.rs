use std::borrow::Cow;

/// The parts of an incoming request needed to derive its lookup path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceRequest {
    request_uri: String,
    context_path: String,
    servlet_path: String,
    path_within_handler_mapping: Option<String>,
}

impl ResourceRequest {
    /// `request_uri` is the raw path as received, including any context prefix
    pub fn new(request_uri: impl Into<String>) -> Self {
        Self {
            request_uri: request_uri.into(),
            ..Self::default()
        }
    }

    pub fn with_context_path(mut self, context_path: impl Into<String>) -> Self {
        self.context_path = context_path.into();
        self
    }

    pub fn with_servlet_path(mut self, servlet_path: impl Into<String>) -> Self {
        self.servlet_path = servlet_path.into();
        self
    }

    /// Records the path a handler mapping already matched for this request
    pub fn with_path_within_handler_mapping(mut self, path: impl Into<String>) -> Self {
        self.path_within_handler_mapping = Some(path.into());
        self
    }

    pub fn request_uri(&self) -> &str {
        &self.request_uri
    }

    pub fn context_path(&self) -> &str {
        &self.context_path
    }

    pub fn servlet_path(&self) -> &str {
        &self.servlet_path
    }

    pub fn path_within_handler_mapping(&self) -> Option<&str> {
        self.path_within_handler_mapping.as_deref()
    }
}

/// Derives routing-scoped lookup paths from raw request paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlPathHelper {
    always_use_full_path: bool,
    url_decode: bool,
    remove_semicolon_content: bool,
}

impl Default for UrlPathHelper {
    fn default() -> Self {
        Self {
            always_use_full_path: false,
            url_decode: true,
            remove_semicolon_content: true,
        }
    }
}

impl UrlPathHelper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the path within the application even when a servlet path is set
    pub fn with_always_use_full_path(mut self, enabled: bool) -> Self {
        self.always_use_full_path = enabled;
        self
    }

    pub fn with_url_decode(mut self, enabled: bool) -> Self {
        self.url_decode = enabled;
        self
    }

    pub fn with_remove_semicolon_content(mut self, enabled: bool) -> Self {
        self.remove_semicolon_content = enabled;
        self
    }

    pub fn always_use_full_path(&self) -> bool {
        self.always_use_full_path
    }

    pub fn url_decode(&self) -> bool {
        self.url_decode
    }

    pub fn remove_semicolon_content(&self) -> bool {
        self.remove_semicolon_content
    }

    /// The path used to match the request against handler mappings
    pub fn lookup_path_for_request(&self, request: &ResourceRequest) -> String {
        if self.always_use_full_path {
            return self.path_within_application(request);
        }

        let rest = self.path_within_servlet_mapping(request);
        if !rest.is_empty() {
            rest
        } else {
            self.path_within_application(request)
        }
    }

    pub fn path_within_application(&self, request: &ResourceRequest) -> String {
        let context_path = self.context_path(request);
        let request_uri = self.request_uri(request);

        match request_uri.strip_prefix(context_path.as_str()) {
            Some("") => "/".to_string(),
            Some(rest) => rest.to_string(),
            None => request_uri,
        }
    }

    pub fn path_within_servlet_mapping(&self, request: &ResourceRequest) -> String {
        let within_application = self.path_within_application(request);
        let servlet_path = self.clean(request.servlet_path());

        match within_application.strip_prefix(servlet_path.as_str()) {
            Some(rest) => rest.to_string(),
            // Request path does not run through the servlet path
            None => servlet_path,
        }
    }

    /// The request URI, decoded and cleaned
    pub fn request_uri(&self, request: &ResourceRequest) -> String {
        self.clean(request.request_uri())
    }

    pub fn context_path(&self, request: &ResourceRequest) -> String {
        match request.context_path() {
            "/" => String::new(),
            context_path => self.clean(context_path),
        }
    }

    fn clean(&self, uri: &str) -> String {
        let mut uri = uri;

        let stripped;
        if self.remove_semicolon_content {
            stripped = strip_semicolon_content(uri);
            uri = stripped.as_str();
        }

        let decoded;
        if self.url_decode {
            decoded = decode(uri);
            uri = &*decoded;
        }

        collapse_slashes(uri)
    }
}

fn decode(uri: &str) -> Cow<'_, str> {
    match urlencoding::decode(uri) {
        Ok(decoded) => decoded,
        Err(e) => {
            tracing::warn!("Could not decode request path '{}': {}", uri, e);
            Cow::Borrowed(uri)
        }
    }
}

/// Removes `;name=value` path parameters, keeping the separators around them
fn strip_semicolon_content(uri: &str) -> String {
    let mut cleaned = String::with_capacity(uri.len());
    let mut rest = uri;

    while let Some(semi) = rest.find(';') {
        cleaned.push_str(&rest[..semi]);
        rest = match rest[semi..].find('/') {
            Some(slash) => &rest[semi + slash..],
            None => "",
        };
    }

    cleaned.push_str(rest);
    cleaned
}

fn collapse_slashes(uri: &str) -> String {
    let mut collapsed = String::with_capacity(uri.len());
    for c in uri.chars() {
        if c == '/' && collapsed.ends_with('/') {
            continue;
        }
        collapsed.push(c);
    }
    collapsed
}
