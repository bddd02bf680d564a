//! Strict URL building from path templates.
//!
//! Templates carry named placeholders (`/table/{tableId}/view/{viewId}`).
//! Building is strict in both directions: a placeholder without a supplied
//! value and a supplied value without a placeholder are both errors. A
//! silently malformed URL is a correctness hazard; failing loudly here keeps
//! the mistake at the call site.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlBuildError {
    /// The template references a placeholder with no supplied value.
    #[error("missing value for placeholder {{{name}}} in {template:?}")]
    MissingParam { template: String, name: String },

    /// A supplied value matches no placeholder in the template.
    #[error("supplied param {name:?} matches no placeholder in {template:?}")]
    UnusedParam { template: String, name: String },

    /// Unbalanced or nested braces in the template.
    #[error("malformed path template {template:?}")]
    MalformedTemplate { template: String },
}

/// Iterate the placeholder names of a template, in order of appearance.
///
/// Malformed brace sequences yield nothing here; [`build_url`] reports them.
pub fn placeholders(template: &str) -> impl Iterator<Item = &str> {
    template.split('{').skip(1).filter_map(|rest| {
        let end = rest.find('}')?;
        let name = &rest[..end];
        (!name.is_empty() && !name.contains('{')).then_some(name)
    })
}

/// Substitute every `{key}` in `template` with the matching value, verbatim
/// and in its original position.
pub fn build_url(template: &str, params: &[(&str, &str)]) -> Result<String, UrlBuildError> {
    let mut out = String::with_capacity(template.len());
    let mut used = vec![false; params.len()];
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let (literal, after_open) = rest.split_at(open);
        out.push_str(literal);
        let after_open = &after_open[1..];

        let close = after_open
            .find('}')
            .ok_or_else(|| UrlBuildError::MalformedTemplate {
                template: template.to_string(),
            })?;
        let name = &after_open[..close];
        if name.is_empty() || name.contains('{') {
            return Err(UrlBuildError::MalformedTemplate {
                template: template.to_string(),
            });
        }

        let idx = params.iter().position(|(key, _)| *key == name).ok_or_else(|| {
            UrlBuildError::MissingParam {
                template: template.to_string(),
                name: name.to_string(),
            }
        })?;
        used[idx] = true;
        out.push_str(params[idx].1);
        rest = &after_open[close + 1..];
    }

    if rest.contains('}') {
        return Err(UrlBuildError::MalformedTemplate {
            template: template.to_string(),
        });
    }
    out.push_str(rest);

    if let Some(idx) = used.iter().position(|u| !u) {
        return Err(UrlBuildError::UnusedParam {
            template: template.to_string(),
            name: params[idx].0.to_string(),
        });
    }

    Ok(out)
}
