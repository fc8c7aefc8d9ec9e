//! Static log corpora used across harnesses.
//!
//! Lines are taken from real InsightEngine output in both prefix formats. The
//! `LEGACY_*` lines carry the `[HH:MM:SS]` tag (with or without the trailing
//! loguru header); the `DEFAULT_*` lines use the bare loguru header.

// ---------------------------------------------------------------------------
// Legacy format ([HH:MM:SS])
// ---------------------------------------------------------------------------

pub const LEGACY_SINGLE_LINE_JSON: &str = r#"[17:42:31] 2025-11-05 17:42:31.287 | INFO | InsightEngine.nodes.summary_node:process_output:131 - 清理后的输出: {"paragraph_latest_state": "这是首次总结内容"}"#;

pub const LEGACY_MULTILINE_JSON: [&str; 3] = [
    "[17:42:31] 2025-11-05 17:42:31.287 | INFO | InsightEngine.nodes.summary_node:process_output:131 - 清理后的输出: {",
    r#"[17:42:31] "paragraph_latest_state": "这是多行\nJSON内容""#,
    "[17:42:31] }",
];

pub const LEGACY_FIRST_SUMMARY: &str = r#"[17:42:31] 2025-11-05 17:42:31.287 | INFO | InsightEngine.nodes.summary_node:process_output:131 - FirstSummaryNode 清理后的输出: {"paragraph_latest_state": "首次总结"}"#;

pub const LEGACY_REFLECTION_SUMMARY: &str = r#"[17:43:00] 2025-11-05 17:43:00.272 | INFO | InsightEngine.nodes.summary_node:process_output:296 - ReflectionSummaryNode 清理后的输出: {"updated_paragraph_latest_state": "反思总结"}"#;

pub const LEGACY_NON_TARGET: &str = "[17:41:16] 2025-11-05 17:41:16.742 | INFO | InsightEngine.nodes.report_structure_node:run:52 - 正在为查询生成报告结构";

// ---------------------------------------------------------------------------
// Loguru default format
// ---------------------------------------------------------------------------

pub const DEFAULT_SINGLE_LINE_JSON: &str = r#"2025-11-05 17:42:31.287 | INFO     | InsightEngine.nodes.summary_node:process_output:131 - 清理后的输出: {"paragraph_latest_state": "这是首次总结内容"}"#;

pub const DEFAULT_MULTILINE_JSON: [&str; 3] = [
    "2025-11-05 17:42:31.287 | INFO     | InsightEngine.nodes.summary_node:process_output:131 - 清理后的输出: {",
    r#"2025-11-05 17:42:31.288 | INFO     | InsightEngine.nodes.summary_node:process_output:132 - "paragraph_latest_state": "这是多行\nJSON内容""#,
    "2025-11-05 17:42:31.289 | INFO     | InsightEngine.nodes.summary_node:process_output:133 - }",
];

pub const DEFAULT_FIRST_SUMMARY: &str = r#"2025-11-05 17:42:31.287 | INFO     | InsightEngine.nodes.summary_node:process_output:131 - FirstSummaryNode 清理后的输出: {"paragraph_latest_state": "首次总结"}"#;

pub const DEFAULT_REFLECTION_SUMMARY: &str = r#"2025-11-05 17:43:00.272 | INFO     | InsightEngine.nodes.summary_node:process_output:296 - ReflectionSummaryNode 清理后的输出: {"updated_paragraph_latest_state": "反思总结"}"#;

pub const DEFAULT_NON_TARGET: &str = "2025-11-05 17:41:16.742 | INFO     | InsightEngine.nodes.report_structure_node:run:52 - 正在为查询生成报告结构: 洛阳钼业预期股价变化";

pub const DEFAULT_FORUM_ENGINE: &str = "2025-11-05 22:31:09.964 | INFO     | ForumEngine.monitor:monitor_logs:457 - ForumEngine: 论坛创建中...";

// ---------------------------------------------------------------------------
// Field priority
// ---------------------------------------------------------------------------

pub const BLOCK_WITH_UPDATED: [&str; 3] = [
    "2025-11-05 17:43:00.272 | INFO     | InsightEngine.nodes.summary_node:process_output:296 - 清理后的输出: {",
    r###"2025-11-05 17:43:00.273 | INFO     | InsightEngine.nodes.summary_node:process_output:297 - "updated_paragraph_latest_state": "## 核心发现（更新版）\n1. 这是更新后的内容""###,
    "2025-11-05 17:43:00.274 | INFO     | InsightEngine.nodes.summary_node:process_output:298 - }",
];

pub const BLOCK_WITH_PARAGRAPH: [&str; 3] = [
    "2025-11-05 17:42:31.287 | INFO     | InsightEngine.nodes.summary_node:process_output:131 - 清理后的输出: {",
    r###"2025-11-05 17:42:31.288 | INFO     | InsightEngine.nodes.summary_node:process_output:132 - "paragraph_latest_state": "## 核心发现概述\n1. 这是首次总结内容""###,
    "2025-11-05 17:42:31.289 | INFO     | InsightEngine.nodes.summary_node:process_output:133 - }",
];

pub const BLOCK_WITH_NEWLINES: [&str; 3] = [
    "[17:42:31] 2025-11-05 17:42:31.287 | INFO | InsightEngine.nodes.summary_node:process_output:131 - 清理后的输出: {",
    r#"[17:42:31] "paragraph_latest_state": "第一行内容\n第二行内容\n第三行内容""#,
    "[17:42:31] }",
];

// ---------------------------------------------------------------------------
// Edge cases
// ---------------------------------------------------------------------------

pub const LINE_WITHOUT_MARKER: &str = "2025-11-05 17:42:31.287 | INFO     | InsightEngine.nodes.summary_node:process_output:131 - JSON解析成功";

pub const LINE_WITH_MARKER_NOT_JSON: &str = "2025-11-05 17:42:31.287 | INFO     | InsightEngine.nodes.summary_node:process_output:131 - 清理后的输出: 这不是JSON格式的内容";

pub const LINE_ONLY_LEGACY_CLOCK: &str = "[17:42:31]";
pub const LINE_ONLY_DEFAULT_HEADER: &str = "2025-11-05 17:42:31.287 | INFO | module:function:1 -";

/// Middle line has an unterminated string literal.
pub const INVALID_JSON: [&str; 3] = [
    "2025-11-05 17:42:31.287 | INFO | InsightEngine.nodes.summary_node:process_output:131 - 清理后的输出: {",
    r#"2025-11-05 17:42:31.288 | INFO | InsightEngine.nodes.summary_node:process_output:132 - "paragraph_latest_state": "缺少结束引号"#,
    "2025-11-05 17:42:31.289 | INFO | InsightEngine.nodes.summary_node:process_output:133 - }",
];

/// One block whose three lines alternate between prefix formats.
pub const MIXED_FORMAT_LINES: [&str; 3] = [
    "[17:42:31] 2025-11-05 17:42:31.287 | INFO | InsightEngine.nodes.summary_node:process_output:131 - 清理后的输出: {",
    r#"2025-11-05 17:42:31.288 | INFO     | InsightEngine.nodes.summary_node:process_output:132 - "paragraph_latest_state": "混合格式内容""#,
    "[17:42:31] }",
];

/// A realistic interleaving: noise, a plain-text target line, a reflection
/// block and a trailing single-line JSON.
pub fn corpus_session() -> Vec<&'static str> {
    let mut lines = vec![DEFAULT_FORUM_ENGINE, LEGACY_NON_TARGET, LINE_WITHOUT_MARKER];
    lines.extend(BLOCK_WITH_PARAGRAPH);
    lines.push(LINE_WITH_MARKER_NOT_JSON);
    lines.extend(BLOCK_WITH_UPDATED);
    lines.push(DEFAULT_NON_TARGET);
    lines.push(LEGACY_REFLECTION_SUMMARY);
    lines
}

/// Generate `blocks` multi-line blocks, alternating prefix formats, each
/// separated by a non-target line. Used by throughput tests.
pub fn corpus_high_volume(blocks: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(blocks * 4);
    for i in 0..blocks {
        let legacy = i % 2 == 0;
        lines.push(crate::common::block_start(legacy));
        lines.push(crate::common::block_field(
            legacy,
            "paragraph_latest_state",
            &format!("段落 {i}\\n第二行"),
        ));
        lines.push(crate::common::block_end(legacy));
        lines.push(format!(
            "2025-11-05 17:41:16.742 | INFO     | InsightEngine.nodes.search_node:run:{i} - 正在搜索第 {i} 页"
        ));
    }
    lines
}
