// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持拉丁文（默认）、英文、波兰文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 语言由调用方显式传入，不修改全局 locale
// ==========================================

/// 显示文本解析器
///
/// 仅用于构造庆节候选的显示标题，不参与裁决
pub trait TextResolver: Send + Sync {
    /// 根据标识与语言返回显示标题
    fn title(&self, id: &str, language: &str) -> String;
}

/// 基于 rust-i18n 的文本解析器
///
/// 翻译键: `observance.<flexibility>.<key>`，缺失时回退为原始标识
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleTexts;

impl LocaleTexts {
    pub fn new() -> Self {
        Self
    }
}

impl TextResolver for LocaleTexts {
    fn title(&self, id: &str, language: &str) -> String {
        let key = match translation_key(id) {
            Some(key) => key,
            None => return id.to_string(),
        };
        let text = rust_i18n::t!(key.as_str(), locale = language).to_string();
        // rust-i18n 未命中时原样返回键（可能带 locale 前缀）
        if text.ends_with(key.as_str()) {
            id.to_string()
        } else {
            text
        }
    }
}

/// 标识 -> 翻译键
///
/// "sancti:12-25m1:1" -> "observance.sancti.12-25m1"
pub fn translation_key(id: &str) -> Option<String> {
    let mut parts = id.split(':');
    match (parts.next(), parts.next()) {
        (Some(flex), Some(key)) if !flex.is_empty() && !key.is_empty() => {
            Some(format!("observance.{}.{}", flex, key))
        }
        _ => None,
    }
}

/// 可用语言列表
pub fn available_locales() -> Vec<String> {
    rust_i18n::available_locales!()
        .into_iter()
        .map(|l| l.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_key() {
        assert_eq!(
            translation_key("sancti:12-25m1:1").as_deref(),
            Some("observance.sancti.12-25m1")
        );
        assert_eq!(
            translation_key("commune:C10a:4").as_deref(),
            Some("observance.commune.C10a")
        );
        assert_eq!(translation_key("garbage"), None);
    }

    #[test]
    fn test_title_per_language() {
        let texts = LocaleTexts::new();
        let la = texts.title("commune:C10a:4", "la");
        let en = texts.title("commune:C10a:4", "en");
        assert!(la.contains("Sancta Maria in Sabbato"));
        assert!(en.contains("Saturday"));
    }

    #[test]
    fn test_missing_title_falls_back_to_id() {
        let texts = LocaleTexts::new();
        assert_eq!(texts.title("sancti:99-99:4", "la"), "sancti:99-99:4");
    }

    #[test]
    fn test_locales_available() {
        let locales = available_locales();
        assert!(locales.iter().any(|l| l == "la"));
        assert!(locales.iter().any(|l| l == "en"));
    }
}
