use crate::script::ScriptReport;

pub fn serialize_script_report(report: &ScriptReport) -> serde_json::Result<String> {
    serde_json::to_string(report)
}

pub fn serialize_script_report_pretty(report: &ScriptReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
