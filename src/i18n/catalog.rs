//! Translation catalog for repolens.
//!
//! Both locales are compile-time static tables keyed by flattened dotted
//! paths (`sortOptions.stars`, `tui.help.title`). Lookup is a linear scan;
//! the tables hold a few dozen keys.
//!
//! ## Adding a new key
//!
//! 1. Add the English entry to `EN`
//! 2. Add the Chinese entry to `ZH` at the same position
//!
//! `catalogs_share_the_same_keys` fails if the tables drift apart.

use crate::model::ParseValueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two display locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Simplified Chinese.
    Zh,
}

impl Locale {
    /// Locale tag (`en` / `zh`).
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Both locales, in toggle order.
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Zh]
    }

    /// The other locale.
    pub fn toggle(self) -> Self {
        match self {
            Locale::En => Locale::Zh,
            Locale::Zh => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "zh" => Ok(Locale::Zh),
            other => Err(ParseValueError::Locale(other.to_string())),
        }
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up `key` in `locale`'s table.
///
/// Missing keys return `key` itself, unchanged. There is no cross-locale
/// fallback.
///
/// # Examples
///
/// ```
/// use repolens::i18n::{t, Locale};
/// assert_eq!(t(Locale::En, "sortOrder.desc"), "Descending");
/// assert_eq!(t(Locale::Zh, "sortOrder.desc"), "降序");
/// assert_eq!(t(Locale::En, "no.such.key"), "no.such.key");
/// ```
pub fn t(locale: Locale, key: &str) -> &str {
    lookup(catalog_for(locale), key).unwrap_or(key)
}

/// Copyright line with `{year}` replaced by `year`.
pub fn copyright(locale: Locale, year: i32) -> String {
    t(locale, "copyright").replace("{year}", &year.to_string())
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn catalog_for(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => EN,
        Locale::Zh => ZH,
    }
}

// ─── English ────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    ("title", "Top 1000 GitHub repositories using the MIT license"),
    (
        "description",
        "Discover and explore high-quality MIT licensed open source projects on GitHub to enhance your development journey",
    ),
    (
        "searchPlaceholder",
        "Search repository name or description...press Enter to confirm",
    ),
    ("reposFound", "repositories found"),
    ("allLanguages", "All Languages"),
    ("sortOptions.stars", "Stars"),
    ("sortOptions.forks", "Forks"),
    ("sortOptions.createdAt", "Created Date"),
    ("sortOptions.updatedAt", "Updated Date"),
    ("sortOrder.desc", "Descending"),
    ("sortOrder.asc", "Ascending"),
    ("filters.minStars", "Min Stars"),
    ("filters.maxStars", "Max Stars"),
    ("filters.minForks", "Min Forks"),
    ("filters.maxForks", "Max Forks"),
    ("noDescription", "No description"),
    (
        "copyright",
        "© {year} GitHub MIT Repos Explorer. All rights reserved.",
    ),
    ("switchLanguage", "切换到中文"),
    // Terminal-only labels
    ("tui.search", "Search"),
    ("tui.searchEditing", "Search (Enter to confirm, Esc to cancel)"),
    ("tui.language", "Language"),
    ("tui.sortBy", "Sort"),
    ("tui.order", "Order"),
    ("tui.noResults", "No repositories match the current filters"),
    ("tui.created", "Created"),
    ("tui.updated", "Updated"),
    ("tui.hint", "? help · / search · l language · s sort · o order · t 中文 · q quit"),
    ("tui.help.title", " Keyboard Shortcuts "),
    ("tui.help.close", " Press Esc or ? to close "),
    ("tui.help.navigation", "Navigation"),
    ("tui.help.moveDown", "Next repository"),
    ("tui.help.moveUp", "Previous repository"),
    ("tui.help.pageDown", "Page down"),
    ("tui.help.pageUp", "Page up"),
    ("tui.help.top", "First repository"),
    ("tui.help.bottom", "Last repository"),
    ("tui.help.filters", "Search & Filters"),
    ("tui.help.search", "Edit search (Enter confirms, Esc cancels)"),
    ("tui.help.nextLanguage", "Next language"),
    ("tui.help.prevLanguage", "Previous language"),
    ("tui.help.clear", "Clear search and filters"),
    ("tui.help.sorting", "Sorting"),
    ("tui.help.nextSort", "Next sort field"),
    ("tui.help.prevSort", "Previous sort field"),
    ("tui.help.toggleOrder", "Toggle ascending / descending"),
    ("tui.help.application", "Application"),
    ("tui.help.toggleLocale", "Switch display language"),
    ("tui.help.help", "Toggle this help"),
    ("tui.help.quit", "Quit"),
];

// ─── Chinese ────────────────────────────────────────────────────────

const ZH: &[(&str, &str)] = &[
    ("title", "使用 MIT 许可证的前1000个GitHub仓库"),
    (
        "description",
        "发现并探索GitHub上优质的MIT许可证开源项目，助力您的开发之旅",
    ),
    ("searchPlaceholder", "搜索仓库名称或描述...按回车确认"),
    ("reposFound", "个仓库"),
    ("allLanguages", "所有语言"),
    ("sortOptions.stars", "Stars"),
    ("sortOptions.forks", "Forks"),
    ("sortOptions.createdAt", "创建时间"),
    ("sortOptions.updatedAt", "更新时间"),
    ("sortOrder.desc", "降序"),
    ("sortOrder.asc", "升序"),
    ("filters.minStars", "最小 Stars"),
    ("filters.maxStars", "最大 Stars"),
    ("filters.minForks", "最小 Forks"),
    ("filters.maxForks", "最大 Forks"),
    ("noDescription", "暂无描述"),
    ("copyright", "© {year} GitHub MIT 仓库浏览器。保留所有权利。"),
    ("switchLanguage", "Switch to English"),
    // Terminal-only labels
    ("tui.search", "搜索"),
    ("tui.searchEditing", "搜索（回车确认，Esc 取消）"),
    ("tui.language", "语言"),
    ("tui.sortBy", "排序"),
    ("tui.order", "顺序"),
    ("tui.noResults", "没有符合当前筛选条件的仓库"),
    ("tui.created", "创建于"),
    ("tui.updated", "更新于"),
    ("tui.hint", "? 帮助 · / 搜索 · l 语言 · s 排序 · o 顺序 · t English · q 退出"),
    ("tui.help.title", " 快捷键 "),
    ("tui.help.close", " 按 Esc 或 ? 关闭 "),
    ("tui.help.navigation", "导航"),
    ("tui.help.moveDown", "下一个仓库"),
    ("tui.help.moveUp", "上一个仓库"),
    ("tui.help.pageDown", "向下翻页"),
    ("tui.help.pageUp", "向上翻页"),
    ("tui.help.top", "第一个仓库"),
    ("tui.help.bottom", "最后一个仓库"),
    ("tui.help.filters", "搜索与筛选"),
    ("tui.help.search", "编辑搜索（回车确认，Esc 取消）"),
    ("tui.help.nextLanguage", "下一个语言"),
    ("tui.help.prevLanguage", "上一个语言"),
    ("tui.help.clear", "清除搜索和筛选"),
    ("tui.help.sorting", "排序"),
    ("tui.help.nextSort", "下一个排序字段"),
    ("tui.help.prevSort", "上一个排序字段"),
    ("tui.help.toggleOrder", "切换升序 / 降序"),
    ("tui.help.application", "应用"),
    ("tui.help.toggleLocale", "切换显示语言"),
    ("tui.help.help", "显示 / 隐藏帮助"),
    ("tui.help.quit", "退出"),
];
