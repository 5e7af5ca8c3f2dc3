//! # Text View
//!
//! Plain-text rendering of the catalog, the error banner and idea cards,
//! used by the command line. The web page renders the same snapshot data.

use crate::catalog::CategoryGroup;
use crate::skills::BusinessIdea;
use crate::state::SessionSnapshot;
use std::fmt::Write;

/// Render grouped pain points; selected names are marked with `*`
pub fn render_catalog(groups: &[CategoryGroup], selected: &[String]) -> String {
    if groups.is_empty() {
        return "No pain points match your search.\n".to_string();
    }

    let mut out = String::new();
    for group in groups {
        let _ = writeln!(out, "{}", group.category);
        for point in &group.points {
            let mark = if selected.contains(&point.name) { '*' } else { ' ' };
            let _ = writeln!(
                out,
                "  [{mark}] {} {} - {}",
                point.emoji, point.name, point.description
            );
        }
        out.push('\n');
    }
    out
}

/// Render one idea card
pub fn render_card(index: usize, idea: &BusinessIdea) -> String {
    format!(
        "{}. {}\n   {}\n   Target Audience: {}\n",
        index + 1,
        idea.name,
        idea.concept,
        idea.target_audience
    )
}

/// Render the result area for a session snapshot
pub fn render_snapshot(snapshot: &SessionSnapshot) -> String {
    if snapshot.status == "loading" {
        return "Generating brilliant ideas...\n".to_string();
    }

    if let Some(error) = &snapshot.error {
        return format!("Error: {error}\n");
    }

    match &snapshot.ideas {
        Some(ideas) if ideas.is_empty() => {
            "No ideas were generated. Try selecting different pain points or refining your search.\n"
                .to_string()
        }
        Some(ideas) => {
            let mut out = String::from("Here are your business ideas:\n\n");
            for (i, idea) in ideas.iter().enumerate() {
                out.push_str(&render_card(i, idea));
                out.push('\n');
            }
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PainPoint;

    fn snapshot(status: &'static str) -> SessionSnapshot {
        SessionSnapshot {
            selected: vec!["Procrastination".into()],
            status,
            can_generate: status != "loading",
            ideas: None,
            error: None,
            error_kind: None,
        }
    }

    #[test]
    fn test_catalog_marks_selected() {
        let groups = vec![CategoryGroup {
            category: "Focus".into(),
            points: vec![
                PainPoint::new("Procrastination", "Putting things off.", "Focus", "⏳"),
                PainPoint::new("Inbox Overwhelm", "Too much email.", "Focus", "📧"),
            ],
        }];
        let out = render_catalog(&groups, &["Procrastination".to_string()]);
        assert!(out.starts_with("Focus\n"));
        assert!(out.contains("[*] ⏳ Procrastination - Putting things off."));
        assert!(out.contains("[ ] 📧 Inbox Overwhelm"));
    }

    #[test]
    fn test_empty_catalog_message() {
        assert!(render_catalog(&[], &[]).contains("No pain points match"));
    }

    #[test]
    fn test_cards() {
        let mut snap = snapshot("success");
        snap.ideas = Some(vec![BusinessIdea {
            name: "FocusFox".into(),
            concept: "A timer that shames you kindly.".into(),
            target_audience: "Students".into(),
        }]);
        let out = render_snapshot(&snap);
        assert!(out.contains("1. FocusFox"));
        assert!(out.contains("Target Audience: Students"));
    }

    #[test]
    fn test_error_banner_and_empty_list() {
        let mut snap = snapshot("error");
        snap.error = Some("Received an empty response from the API.".into());
        assert_eq!(
            render_snapshot(&snap),
            "Error: Received an empty response from the API.\n"
        );

        let mut snap = snapshot("success");
        snap.ideas = Some(Vec::new());
        assert!(render_snapshot(&snap).starts_with("No ideas were generated"));

        assert!(render_snapshot(&snapshot("loading")).contains("Generating"));
        assert!(render_snapshot(&snapshot("idle")).is_empty());
    }
}
