//! Checks on the C header that `build.rs` writes to the workspace root.
use std::fs;
use std::path::PathBuf;

fn header() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../V3dFFI.h");
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}

/// Split the header into code (comments removed) and the text of each block
/// comment. Panics on a block comment that never closes.
fn split_comments(text: &str) -> (String, Vec<String>) {
    let mut code = String::new();
    let mut comments = Vec::new();
    let mut rest = text;

    loop {
        let line = rest.find("//").unwrap_or(rest.len());
        match rest.find("/*") {
            Some(b) if b < line => {
                code.push_str(&rest[..b]);
                let body = &rest[b + 2..];
                let end = body
                    .find("*/")
                    .unwrap_or_else(|| panic!("unterminated comment at byte {b}"));
                comments.push(body[..end].to_string());
                rest = &body[end + 2..];
            }
            _ if line < rest.len() => {
                code.push_str(&rest[..line]);
                rest = rest[line..].find('\n').map_or("", |n| &rest[line + n..]);
            }
            _ => {
                code.push_str(rest);
                return (code, comments);
            }
        }
    }
}

#[test]
fn doc_comments_do_not_leak_into_code() {
    let (code, comments) = split_comments(&header());

    for comment in &comments {
        assert!(
            !comment.contains("/*"),
            "nested comment opener in header doc block:\n{comment}"
        );
    }

    // Text cut off by an early `*/` shows up as doc lines or markdown in code
    for (n, line) in code.lines().enumerate() {
        let trimmed = line.trim_start();
        assert!(
            !trimmed.starts_with('*') && !line.contains('`'),
            "doc text outside a comment on code line {}: {line}",
            n + 1
        );
    }
}

#[test]
fn doc_comments_are_exported() {
    let (_, comments) = split_comments(&header());
    assert!(comments.iter().any(|c| c.contains("v3d_get_last_error")));
    assert!(comments.iter().any(|c| c.contains("Vector3(x, y, z)")));
}

#[test]
fn enumerators_are_prefixed_with_their_enum() {
    let (code, _) = split_comments(&header());

    for name in [
        "V3dErrorCode_Ok",
        "V3dErrorCode_NullPointer",
        "V3dErrorCode_InvalidParameter",
        "V3dErrorCode_BufferTooSmall",
        "V3dConstant_Zero",
        "V3dConstant_Unit",
        "V3dConstant_X",
        "V3dConstant_Y",
        "V3dConstant_Z",
    ] {
        assert!(code.contains(name), "missing enumerator {name}");
    }

    // a consumer's `#define X 0` must not collide with anything in the header
    let bare = ["Ok", "NullPointer", "Zero", "Unit", "X", "Y", "Z"];
    for line in code.lines() {
        let ident = line.trim().split([' ', ',', '=']).next().unwrap_or("");
        assert!(
            !bare.contains(&ident),
            "unprefixed enumerator in header: {line}"
        );
    }
}

#[test]
fn exported_functions_are_declared() {
    let (code, _) = split_comments(&header());
    for name in [
        "v3d_new",
        "v3d_rotate",
        "v3d_equals",
        "v3d_rotate_in_place",
        "v3d_from_array",
        "v3d_format",
        "v3d_get_last_error_code",
    ] {
        assert!(code.contains(&format!("{name}(")), "missing declaration {name}");
    }
    assert!(code.contains("#ifndef V3D_FFI_H"));
}
