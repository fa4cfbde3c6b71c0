use super::*;
use crate::state::chat::{ChatRole, GREETING};

fn delta(text: &str) -> String {
    format!("data: {}\n", serde_json::json!({"choices": [{"delta": {"content": text}}]}))
}

fn conversation() -> ChatState {
    let mut chat = ChatState::default();
    chat.push_user("Got anything for running?");
    chat
}

fn last_content(chat: &ChatState) -> &str {
    chat.messages.last().map(|m| m.content.as_str()).unwrap_or_default()
}

// =============================================================
// Happy path
// =============================================================

#[test]
fn two_fragments_then_done_build_one_reply() {
    let mut chat = conversation();
    let mut asm = ChatStreamAssembler::new();

    let s1 = asm.push_chunk(br#"data: {"choices":[{"delta":{"content":"Hi"}}]}
"#, &mut chat);
    let s2 = asm.push_chunk(br#"data: {"choices":[{"delta":{"content":" there"}}]}
"#, &mut chat);
    let s3 = asm.push_chunk(b"data: [DONE]\n", &mut chat);

    assert_eq!(s1.fragments, 1);
    assert_eq!(s2.fragments, 1);
    assert!(s3.done);
    assert_eq!(chat.messages.len(), 3);
    assert_eq!(last_content(&chat), "Hi there");
    assert_eq!(chat.messages[2].role, ChatRole::Assistant);
    assert_eq!(chat.messages[0].content, GREETING);
    assert_eq!(asm.finish(), "Hi there");
}

#[test]
fn several_lines_in_one_chunk() {
    let mut chat = conversation();
    let mut asm = ChatStreamAssembler::new();
    let chunk = format!("{}{}{}", delta("a"), delta("b"), delta("c"));
    let summary = asm.push_chunk(chunk.as_bytes(), &mut chat);
    assert_eq!(summary.fragments, 3);
    assert_eq!(last_content(&chat), "abc");
    assert_eq!(chat.messages.len(), 3);
}

#[test]
fn crlf_line_endings_are_accepted() {
    let mut chat = conversation();
    let mut asm = ChatStreamAssembler::new();
    asm.push_chunk(b"data: {\"choices\":[{\"delta\":{\"content\":\"ok\"}}]}\r\n", &mut chat);
    assert_eq!(last_content(&chat), "ok");
}

// =============================================================
// Chunk boundaries
// =============================================================

#[test]
fn line_split_mid_json_is_carried_across_chunks() {
    let mut chat = conversation();
    let mut asm = ChatStreamAssembler::new();

    let first = asm.push_chunk(br#"data: {"choi"#, &mut chat);
    assert_eq!(first, ChunkSummary::default());
    assert_eq!(asm.pending(), r#"data: {"choi"#);
    assert_eq!(chat.messages.len(), 2);

    asm.push_chunk(br#"ces":[{"delta":{"content":"Pegasus"}}]}
"#, &mut chat);
    assert_eq!(last_content(&chat), "Pegasus");
    assert!(asm.pending().is_empty());
}

#[test]
fn every_byte_boundary_yields_same_text() {
    let stream = format!("{}{}: keep-alive\n\n{}data: [DONE]\n", delta("Zoom "), delta("naïve 👟"), delta("!"));
    let bytes = stream.as_bytes();
    for split in 0..=bytes.len() {
        let mut chat = conversation();
        let mut asm = ChatStreamAssembler::new();
        asm.push_chunk(&bytes[..split], &mut chat);
        asm.push_chunk(&bytes[split..], &mut chat);
        assert_eq!(last_content(&chat), "Zoom naïve 👟!", "split at {split}");
        assert_eq!(chat.messages.len(), 3, "split at {split}");
    }
}

#[test]
fn multibyte_character_split_across_chunks() {
    let mut chat = conversation();
    let mut asm = ChatStreamAssembler::new();
    let line = delta("€");
    let bytes = line.as_bytes();
    let euro_start = line.find('€').unwrap();
    asm.push_chunk(&bytes[..=euro_start], &mut chat);
    asm.push_chunk(&bytes[euro_start + 1..], &mut chat);
    assert_eq!(last_content(&chat), "€");
}

// =============================================================
// Skipped lines
// =============================================================

#[test]
fn comments_blank_and_foreign_lines_are_skipped() {
    let mut chat = conversation();
    let mut asm = ChatStreamAssembler::new();
    let chunk = format!(": ping\n\n   \nevent: message\nid: 7\ndata:{{}}\n{}", delta("x"));
    let summary = asm.push_chunk(chunk.as_bytes(), &mut chat);
    assert_eq!(summary.fragments, 1);
    assert!(!summary.rebuffered);
    assert_eq!(last_content(&chat), "x");
}

#[test]
fn payload_without_content_is_ignored() {
    let mut chat = conversation();
    let mut asm = ChatStreamAssembler::new();
    let chunk = concat!(
        "data: {\"choices\":[{\"delta\":{\"role\":\"assistant\"}}]}\n",
        "data: {\"choices\":[{\"delta\":{\"content\":\"\"}}]}\n",
        "data: {\"choices\":[]}\n",
        "data: 42\n",
    );
    let summary = asm.push_chunk(chunk.as_bytes(), &mut chat);
    assert_eq!(summary.fragments, 0);
    assert_eq!(chat.messages.len(), 2);
}

// =============================================================
// [DONE]
// =============================================================

#[test]
fn done_stops_only_the_current_chunk() {
    let mut chat = conversation();
    let mut asm = ChatStreamAssembler::new();
    let chunk = format!("{}data:  [DONE]  \n{}", delta("one"), delta(" two"));
    let summary = asm.push_chunk(chunk.as_bytes(), &mut chat);
    assert!(summary.done);
    assert_eq!(summary.fragments, 1);
    assert_eq!(last_content(&chat), "one");

    // Lines after [DONE] stay buffered and are processed with the next chunk.
    asm.push_chunk(b"", &mut chat);
    assert_eq!(last_content(&chat), "one two");
}

// =============================================================
// Malformed JSON
// =============================================================

#[test]
fn malformed_line_is_rebuffered_and_blocks_following_lines() {
    let mut chat = conversation();
    let mut asm = ChatStreamAssembler::new();
    let chunk = format!("data: {{\"choices\": [\n{}", delta("later"));
    let summary = asm.push_chunk(chunk.as_bytes(), &mut chat);
    assert!(summary.rebuffered);
    assert_eq!(summary.fragments, 0);
    assert!(asm.pending().starts_with("data: {\"choices\": [\n"));
    assert!(asm.pending().ends_with(&delta("later")));
}

#[test]
fn malformed_line_is_dropped_after_retry_limit() {
    let mut chat = conversation();
    let mut asm = ChatStreamAssembler::new();
    let chunk = format!("data: {{broken\n{}", delta("recovered"));
    asm.push_chunk(chunk.as_bytes(), &mut chat);
    for _ in 1..MAX_REBUFFER_ATTEMPTS {
        let summary = asm.push_chunk(b"", &mut chat);
        assert!(summary.rebuffered);
    }
    let summary = asm.push_chunk(b"", &mut chat);
    assert!(!summary.rebuffered);
    assert_eq!(summary.fragments, 1);
    assert_eq!(last_content(&chat), "recovered");
}

#[test]
fn rebuffered_line_keeps_crlf_stripped_text() {
    let mut chat = conversation();
    let mut asm = ChatStreamAssembler::new();
    asm.push_chunk(b"data: {nope\r\n", &mut chat);
    assert_eq!(asm.pending(), "data: {nope\n");
}

// =============================================================
// finish
// =============================================================

#[test]
fn finish_discards_partial_line() {
    let mut chat = conversation();
    let mut asm = ChatStreamAssembler::new();
    asm.push_chunk(delta("kept").as_bytes(), &mut chat);
    asm.push_chunk(br#"data: {"choices":[{"delta":{"content":"lost"#, &mut chat);
    assert_eq!(asm.finish(), "kept");
    assert_eq!(last_content(&chat), "kept");
}

#[test]
fn delta_content_reads_nested_path() {
    let value = serde_json::json!({"choices": [{"delta": {"content": "x"}}, {"delta": {"content": "y"}}]});
    assert_eq!(delta_content(&value), Some("x"));
    assert_eq!(delta_content(&serde_json::json!({"choices": [{"delta": {"content": 3}}]})), None);
}
