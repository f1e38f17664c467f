//! 表示フィールドカタログ
//!
//! レスポンスのどのキーをどの順番・見出し・アイコンで表示するかの静的定義。
//! 優先度の安定ソートはプロセス内で一度だけ行う。

use lazy_static::lazy_static;
use serde::Serialize;

/// カードのアイコン
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    User,
    Envelope,
    Phone,
    InfoCircle,
    GraduationCap,
    Briefcase,
    Tools,
    ProjectDiagram,
    Certificate,
    Trophy,
    Link,
    Warning,
}

impl Icon {
    /// Font Awesome のクラス名
    pub fn css_class(&self) -> &'static str {
        match self {
            Icon::User => "fas fa-user",
            Icon::Envelope => "fas fa-envelope",
            Icon::Phone => "fas fa-phone",
            Icon::InfoCircle => "fas fa-info-circle",
            Icon::GraduationCap => "fas fa-graduation-cap",
            Icon::Briefcase => "fas fa-briefcase",
            Icon::Tools => "fas fa-tools",
            Icon::ProjectDiagram => "fas fa-project-diagram",
            Icon::Certificate => "fas fa-certificate",
            Icon::Trophy => "fas fa-trophy",
            Icon::Link => "fas fa-link",
            Icon::Warning => "fas fa-exclamation-triangle",
        }
    }

    /// 端末表示用の絵文字
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::User => "👤",
            Icon::Envelope => "✉️",
            Icon::Phone => "📞",
            Icon::InfoCircle => "ℹ️",
            Icon::GraduationCap => "🎓",
            Icon::Briefcase => "💼",
            Icon::Tools => "🛠️",
            Icon::ProjectDiagram => "📂",
            Icon::Certificate => "📜",
            Icon::Trophy => "🏆",
            Icon::Link => "🔗",
            Icon::Warning => "⚠️",
        }
    }
}

/// 優先度グループ
///
/// 連絡先 → 経歴などの文章 → リスト系 の順に並べる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Priority {
    Identity = 1,
    Narrative = 2,
    Listing = 3,
}

/// 1フィールド分の表示定義
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: Icon,
    pub priority: Priority,
}

const fn spec(key: &'static str, title: &'static str, icon: Icon, priority: Priority) -> FieldSpec {
    FieldSpec { key, title, icon, priority }
}

/// 宣言順のカタログ
pub const FIELD_SPECS: &[FieldSpec] = &[
    spec("name", "Name", Icon::User, Priority::Identity),
    spec("email_id", "Email", Icon::Envelope, Priority::Identity),
    spec("mobile_number", "Phone", Icon::Phone, Priority::Identity),
    spec("about", "About", Icon::InfoCircle, Priority::Narrative),
    spec("education", "Education", Icon::GraduationCap, Priority::Narrative),
    spec("experience", "Experience", Icon::Briefcase, Priority::Narrative),
    spec("skills", "Skills", Icon::Tools, Priority::Listing),
    spec("projects", "Projects", Icon::ProjectDiagram, Priority::Listing),
    spec("certifications", "Certifications", Icon::Certificate, Priority::Listing),
    spec("awardsection", "Awards", Icon::Trophy, Priority::Listing),
    spec("links", "Links", Icon::Link, Priority::Listing),
];

lazy_static! {
    static ref ORDERED_SPECS: Vec<FieldSpec> = {
        let mut specs = FIELD_SPECS.to_vec();
        // sort_by_key は安定ソート（同一優先度内は宣言順のまま）
        specs.sort_by_key(|s| s.priority);
        specs
    };
}

/// 優先度順のカタログ
pub fn ordered_catalog() -> &'static [FieldSpec] {
    ORDERED_SPECS.as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_all_known_keys() {
        let keys: Vec<&str> = ordered_catalog().iter().map(|s| s.key).collect();
        assert_eq!(
            keys,
            vec![
                "name", "email_id", "mobile_number",
                "about", "education", "experience",
                "skills", "projects", "certifications", "awardsection", "links",
            ]
        );
    }

    #[test]
    fn test_catalog_priority_is_non_decreasing() {
        let specs = ordered_catalog();
        assert!(specs.windows(2).all(|w| w[0].priority <= w[1].priority));
    }

    #[test]
    fn test_catalog_is_built_once() {
        let first = ordered_catalog().as_ptr();
        let second = ordered_catalog().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn test_awards_entry() {
        let spec = ordered_catalog()
            .iter()
            .find(|s| s.key == "awardsection")
            .expect("awardsectionが見つからない");
        assert_eq!(spec.title, "Awards");
        assert_eq!(spec.icon, Icon::Trophy);
        // errorはフィールドではない
        assert!(ordered_catalog().iter().all(|s| s.key != "error"));
    }

    #[test]
    fn test_icon_css_class() {
        assert_eq!(Icon::User.css_class(), "fas fa-user");
        assert_eq!(Icon::Warning.css_class(), "fas fa-exclamation-triangle");
    }
}
