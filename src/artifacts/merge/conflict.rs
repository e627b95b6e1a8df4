use bytes::Bytes;

const CURRENT_MARKER: &[u8] = b"<<<<<<< HEAD\n";
const SEPARATOR_MARKER: &[u8] = b"=======\n";
const TARGET_MARKER: &[u8] = b">>>>>>>\n";

/// Content written for a conflicted file
///
/// Both sides are copied verbatim, so a side without a trailing newline runs
/// straight into the following marker. A deleted side contributes nothing.
pub fn conflict_content(current: Option<&[u8]>, target: Option<&[u8]>) -> Bytes {
    let current = current.unwrap_or_default();
    let target = target.unwrap_or_default();

    let mut content = Vec::with_capacity(
        CURRENT_MARKER.len()
            + current.len()
            + SEPARATOR_MARKER.len()
            + target.len()
            + TARGET_MARKER.len(),
    );
    content.extend_from_slice(CURRENT_MARKER);
    content.extend_from_slice(current);
    content.extend_from_slice(SEPARATOR_MARKER);
    content.extend_from_slice(target);
    content.extend_from_slice(TARGET_MARKER);

    Bytes::from(content)
}
