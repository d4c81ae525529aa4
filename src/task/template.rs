//! Fixed XML template for the mock task list.

use std::fmt::Write;

use super::tile::TileId;

pub const XML_HEADER: &str =
    "<?xml version='1.0' encoding='UTF-8' standalone='yes'?>\n<mockTaskList>\n<taskList>";
pub const XML_FOOTER: &str = "</taskList>\n</mockTaskList>";

const TASK_STATUS: &str = "Pending";
const TASK_CATEGORY: &str = "BUILD-ING_CREATION";
const TASK_DESCRIPTION: &str = "QIL for Stuggart, asbhatka";
const TILE_SCHEME: &str = "HERE";
const TILE_KEY_FORMAT: &str = "LONGKEY";

/// Render a single `<task>` fragment.
pub fn render_task(task_id: u64, tile_id: &TileId, earthcore_url: &str) -> String {
    let mut out = String::with_capacity(512);
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "<task><taskId>{task_id}</taskId>\n\
         <taskStatus>{TASK_STATUS}</taskStatus><category>{TASK_CATEGORY}</category>\n\
         <taskDescription>{TASK_DESCRIPTION}</taskDescription>\n\
         <inboundContextData><items>\n\
         \x20     <item><key>earthCoreUrl</key><value>{earthcore_url}</value></item>\n\
         \x20     <item><key>tileId</key><value>{tile_id}</value></item>\n\
         \x20     <item><key>tileScheme</key><value>{TILE_SCHEME}</value></item>\n\
         \x20     <item><key>tileKeyFormat</key><value>{TILE_KEY_FORMAT}</value></item>\n\
         </items></inboundContextData>\n\
         </task>"
    );
    out
}

/// Render a complete task-list document.
///
/// The task at position `i` gets `starting_task_id + i`. Header, each task and
/// footer are joined with a single newline.
pub fn generate(tile_ids: &[TileId], starting_task_id: u64, earthcore_url: &str) -> String {
    let mut parts = Vec::with_capacity(tile_ids.len() + 2);
    parts.push(XML_HEADER.to_string());
    parts.extend(
        tile_ids
            .iter()
            .zip(starting_task_id..)
            .map(|(tile_id, task_id)| render_task(task_id, tile_id, earthcore_url)),
    );
    parts.push(XML_FOOTER.to_string());
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::PROD_URL;

    fn tiles(ids: &[&str]) -> Vec<TileId> {
        ids.iter().map(|id| TileId::parse(id).unwrap()).collect()
    }

    #[test]
    fn test_render_task_layout() {
        let task = render_task(7, &TileId::parse("4242").unwrap(), "http://x/");
        let expected = "<task><taskId>7</taskId>\n\
<taskStatus>Pending</taskStatus><category>BUILD-ING_CREATION</category>\n\
<taskDescription>QIL for Stuggart, asbhatka</taskDescription>\n\
<inboundContextData><items>\n      \
<item><key>earthCoreUrl</key><value>http://x/</value></item>\n      \
<item><key>tileId</key><value>4242</value></item>\n      \
<item><key>tileScheme</key><value>HERE</value></item>\n      \
<item><key>tileKeyFormat</key><value>LONGKEY</value></item>\n\
</items></inboundContextData>\n\
</task>";
        assert_eq!(task, expected);
    }

    #[test]
    fn test_generate_wraps_tasks() {
        let doc = generate(&tiles(&["1", "2"]), 1, PROD_URL);
        assert!(doc.starts_with(
            "<?xml version='1.0' encoding='UTF-8' standalone='yes'?>\n<mockTaskList>\n<taskList>\n<task>"
        ));
        assert!(doc.ends_with("</task>\n</taskList>\n</mockTaskList>"));
        assert_eq!(doc.matches("<task>").count(), 2);
    }

    #[test]
    fn test_generate_numbers_from_start() {
        let doc = generate(&tiles(&["10", "20", "30"]), 100, PROD_URL);
        assert!(doc.contains("<taskId>100</taskId>"));
        assert!(doc.contains("<taskId>101</taskId>"));
        assert!(doc.contains("<taskId>102</taskId>"));
        assert!(!doc.contains("<taskId>103</taskId>"));
        let first = doc.find("<value>10</value>").unwrap();
        let last = doc.find("<value>30</value>").unwrap();
        assert!(first < last);
    }
}
