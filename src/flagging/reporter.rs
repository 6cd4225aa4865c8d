//! Human-readable rendering of flag reasons

use crate::flagging::detector::FlagReason;

/// Format a list of flag reasons into display text.
///
/// One reason renders as "Same Mobile number", two as
/// "Same Mobile number & GitHub", three or more as a comma list with an
/// ampersand before the last item. An empty list yields the degenerate
/// "Same " and is the caller's responsibility to guard against.
pub fn format_flag_reason(reasons: &[FlagReason]) -> String {
    let labels: Vec<&str> = reasons.iter().map(|r| r.label()).collect();
    join_labels(&labels)
}

/// Format wire-format reason codes into display text.
///
/// Known codes map to their field labels; unrecognized codes pass through
/// unchanged as their own label.
pub fn format_flag_reason_codes(codes: &[String]) -> String {
    let labels: Vec<&str> = codes
        .iter()
        .map(|code| match FlagReason::from_code(code) {
            Some(reason) => reason.label(),
            None => code.as_str(),
        })
        .collect();
    join_labels(&labels)
}

fn join_labels(labels: &[&str]) -> String {
    match labels {
        [] => "Same ".to_string(),
        [only] => format!("Same {}", only),
        [first, second] => format!("Same {} & {}", first, second),
        _ => {
            let (last, rest) = labels.split_last().unwrap();
            format!("Same {} & {}", rest.join(", "), last)
        }
    }
}
