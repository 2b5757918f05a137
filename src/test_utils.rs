//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use std::fs;
use std::path::Path;

use serde_json::{
    Map,
    Value,
    json,
};

use crate::input::{
    ArticleEntry,
    ArticleRecord,
};

/// テスト用の `ArticleRecord` を作成する
pub(crate) fn article(slug: &str, title: &str, content: &str) -> ArticleRecord {
    ArticleRecord { slug: slug.to_string(), title: title.to_string(), content: content.to_string() }
}

/// テスト用の `ArticleEntry` を作成する（description なし）
pub(crate) fn entry(slug: &str, title: &str, content: &str) -> ArticleEntry {
    article(slug, title, content).into()
}

/// `<root>/src/translations/<locale>/ressources.json` に記事一覧を書き出す
///
/// `None` のフィールドはキーごと省略する
///
/// # Panics
/// ディレクトリ作成または書き込みに失敗した場合
#[allow(clippy::unwrap_used)]
pub(crate) fn write_ressources(root: &Path, locale: &str, articles: &[ArticleEntry]) {
    let dir = root.join("src/translations").join(locale);
    fs::create_dir_all(&dir).unwrap();

    let articles: Vec<Value> = articles
        .iter()
        .map(|a| {
            let mut object = Map::new();
            object.insert("slug".to_string(), json!(a.slug));
            for (key, value) in
                [("title", &a.title), ("description", &a.description), ("content", &a.content)]
            {
                if let Some(value) = value {
                    object.insert(key.to_string(), json!(value));
                }
            }
            Value::Object(object)
        })
        .collect();
    fs::write(dir.join("ressources.json"), json!({ "Articles": articles }).to_string()).unwrap();
}
