//! Item Context - 文本转义

/// 转义 `<` 与 `>`，防止存入的文本被当作标记渲染
///
/// 只处理这两个字符，`&` 和引号原样保留。
pub fn sanitize(input: &str) -> String {
    input.replace('<', "&lt;").replace('>', "&gt;")
}
