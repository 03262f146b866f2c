//! Fixed directives and prompt builders for each pipeline stage.

use std::fmt::Write;

/// System directive sent with every backend call.
pub const SYSTEM_DIRECTIVE: &str = r#"You are an expert meeting-notes summarizer.
Rules (follow strictly):
- Do NOT repeat or quote the full transcript.
- Be concise and structured.
- If the user provides a custom instruction, follow it.
- Prefer Markdown with clear sections.
- Limit the whole output to ~250-350 words unless the user asks otherwise.

Default sections (include only when present):
## Summary
- ...

## Action Items (Owner — Task — Due)
- ...

## Decisions
- ...

## Risks / Follow-ups
- ..."#;

/// Instruction used when the caller supplies none.
pub const DEFAULT_INSTRUCTION: &str = "Summarize clearly in concise bullet points.";

/// Returned for blank transcripts, without any external call.
pub const EMPTY_TRANSCRIPT_SENTINEL: &str = "No transcript provided.";

/// Instruction used when an improve request supplies none.
pub const DEFAULT_IMPROVE_INSTRUCTION: &str = "Tighten wording; keep structure and headings.";

/// Build the user message for one chunk-summarization call.
pub fn chunk_prompt(chunk: &str, instruction: &str) -> String {
    format!(
        "{instruction}\n\nTranscript (partial):\n\"\"\"\n{chunk}\n\"\"\"\nOnly provide the summary; do not quote the transcript lines verbatim."
    )
}

/// Build the user message for the merge call.
pub fn merge_prompt(partials: &[String], instruction: &str) -> String {
    let mut prompt = format!(
        "Combine these partial summaries into one cohesive summary.\nEnsure no duplication, maximum clarity, and keep it within ~300 words.\nRespect the instruction:\n\nInstruction:\n{instruction}\n\nPartial summaries:\n"
    );
    for (index, partial) in partials.iter().enumerate() {
        if index > 0 {
            prompt.push_str("\n\n");
        }
        let _ = write!(prompt, "--- Part {} ---\n{}", index + 1, partial);
    }
    prompt
}

/// Build the user message for the polish call.
pub fn polish_prompt(merged: &str, instruction: &str) -> String {
    format!(
        "Polish the following summary.\n- Keep within ~300 words\n- No transcript quotes\n- Keep Markdown headings & bullets\n- Follow user's intent\n\nUser instruction:\n{instruction}\n\nSummary to polish:\n{merged}"
    )
}

/// Build the user message for an improve call on an existing summary.
pub fn improve_prompt(summary: &str, instructions: &str) -> String {
    format!(
        "Improve this summary per the instructions. Do not add transcript lines.\n\nInstructions:\n{instructions}\n\nSummary:\n{summary}"
    )
}

/// Deterministic merge used when the backend is unavailable or failing:
/// a header followed by each partial under a numbered sub-heading, in
/// original chunk order.
pub fn merge_fallback(partials: &[String]) -> String {
    let mut out = String::from("## Summary (Merged)");
    for (index, partial) in partials.iter().enumerate() {
        let _ = write!(out, "\n\n### Part {}\n{}", index + 1, partial);
    }
    out
}
