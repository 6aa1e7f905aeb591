use anyhow::Result;
use qbx::BrowseOutcome;
use serde_json::json;

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &BrowseOutcome) {
    if !outcome.accepted {
        println!("Browse cancelled (query: '{}')", outcome.query);
        return;
    }

    match &outcome.selection {
        Some(question) => println!(
            "{}\t{}\t{}",
            question.id,
            question.kind.label(),
            question.title
        ),
        None => println!("No selection"),
    }
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &BrowseOutcome) -> Result<String> {
    let selection = outcome
        .selection
        .as_ref()
        .map(serde_json::to_value)
        .transpose()?;

    let payload = json!({
        "accepted": outcome.accepted,
        "query": outcome.query,
        "selection": selection,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &BrowseOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}
