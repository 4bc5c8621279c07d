/// Representation chosen for a listing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

impl ResponseFormat {
    /// Picks the format from an `Accept` header value.
    ///
    /// Media ranges are considered in the order the client listed them; the first
    /// JSON or XML type wins. Ranges with `q=0` are refused and skipped, other
    /// quality values are not weighed. Anything else, including a missing header
    /// or `*/*`, falls back to JSON.
    pub fn negotiate(accept: Option<&str>) -> Self {
        let Some(accept) = accept else {
            return Self::default();
        };

        accept
            .split(',')
            .filter_map(|range| {
                let mut parts = range.split(';');
                let essence = parts.next()?.trim().to_ascii_lowercase();
                if parts.any(is_refused) {
                    return None;
                }
                match essence.as_str() {
                    "application/xml" | "text/xml" => Some(Self::Xml),
                    "application/json" => Some(Self::Json),
                    _ => None,
                }
            })
            .next()
            .unwrap_or_default()
    }
}

// `q=0` (or `q=0.0`, `q=0.000`) marks a media range the client does not accept.
fn is_refused(param: &str) -> bool {
    let Some((name, value)) = param.split_once('=') else {
        return false;
    };
    name.trim().eq_ignore_ascii_case("q")
        && value
            .trim()
            .parse::<f32>()
            .is_ok_and(|quality| quality <= 0.0)
}
