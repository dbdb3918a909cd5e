/// Extensions treated as "not code" for `code_only` filtering (spec §4.8
/// "Extension filter") and as the "doc" category for category filtering
/// (spec §4.2 "Category filter"). Lowercase, without the leading dot.
pub const NON_CODE_EXTENSIONS: &[&str] = &[
    "md", "txt", "json", "yaml", "yml", "xml", "csv", "log", "ini", "cfg", "conf", "toml", "env",
    "properties", "html", "htm",
    // images
    "png", "jpg", "jpeg", "gif", "bmp", "svg", "ico", "webp",
    // office documents
    "doc", "docx", "xls", "xlsx", "ppt", "pptx", "pdf",
    // lock / checksum / generated module manifests
    "lock", "sum", "mod",
];

pub fn extension_of(path: &str) -> Option<&str> {
    path.rsplit_once('.').map(|(_, ext)| ext).filter(|ext| !ext.contains('/'))
}

pub fn is_non_code_extension(path: &str) -> bool {
    extension_of(path)
        .map(|ext| NON_CODE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
