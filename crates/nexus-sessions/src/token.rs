//! Opaque control tokens carried in component custom-ids.
//!
//! Each rendered control carries `"{session_id}:{control}"`; when an
//! interaction event arrives the token is decoded and looked up against the
//! owning session, instead of binding per-option callbacks.

/// A control within a session's message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// The option button at this index in a choice session.
    Option(usize),
    /// The pager's previous-page button.
    Previous,
    /// The pager's next-page button.
    Next,
}

/// Encodes a control token for `session_id`.
#[must_use]
pub fn encode(session_id: u64, control: Control) -> String {
    match control {
        Control::Option(index) => format!("{session_id}:opt:{index}"),
        Control::Previous => format!("{session_id}:prev"),
        Control::Next => format!("{session_id}:next"),
    }
}

/// Decodes a raw custom-id back into its session id and control.
///
/// Foreign custom-ids (other sessions, other widgets) decode to `None` and
/// are ignored by the caller.
#[must_use]
pub fn decode(raw: &str) -> Option<(u64, Control)> {
    let mut parts = raw.splitn(3, ':');
    let session_id: u64 = parts.next()?.parse().ok()?;
    let control = match (parts.next()?, parts.next()) {
        ("opt", Some(index)) => Control::Option(index.parse().ok()?),
        ("prev", None) => Control::Previous,
        ("next", None) => Control::Next,
        _ => return None,
    };
    Some((session_id, control))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_control() {
        for control in [Control::Option(0), Control::Option(12), Control::Previous, Control::Next] {
            let raw = encode(9_876_543_210, control);
            assert_eq!(decode(&raw), Some((9_876_543_210, control)));
        }
    }

    #[test]
    fn rejects_foreign_ids() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("not-a-token"), None);
        assert_eq!(decode("12:unknown"), None);
        assert_eq!(decode("12:opt:x"), None);
        assert_eq!(decode("x:opt:1"), None);
    }
}
