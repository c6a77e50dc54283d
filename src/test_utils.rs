//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use crate::catalog::{
    Catalog,
    CatalogSet,
    TranslationEntry,
};

/// テスト用の Catalog を作成する
///
/// # Arguments
/// * `entries` - `(キー, description, defaultMessage)` の一覧
pub(crate) fn catalog(entries: &[(&str, &str, &str)]) -> Catalog {
    entries
        .iter()
        .map(|(key, description, message)| {
            ((*key).to_string(), TranslationEntry::new(*description, *message))
        })
        .collect()
}

/// テスト用の CatalogSet を作成する（言語の順序を保持）
///
/// # Panics
/// 言語コードが空または重複している場合
#[allow(clippy::expect_used)]
pub(crate) fn catalog_set(languages: &[(&str, Catalog)]) -> CatalogSet {
    CatalogSet::from_pairs(
        languages.iter().map(|(language, catalog)| (*language, catalog.clone())),
    )
    .expect("test languages must be unique and non-empty")
}
