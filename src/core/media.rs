use crate::domain::model::Media;

/// 將內容服務回傳的相對媒體路徑補成絕對 URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaResolver {
    origin: String,
}

impl MediaResolver {
    pub fn new(origin: impl AsRef<str>) -> Self {
        Self {
            origin: origin.as_ref().trim_end_matches('/').to_string(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// 絕對 URL 原樣返回；相對路徑與 origin 之間只保留一個 `/`
    pub fn resolve(&self, path: &str) -> Option<String> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }

        if is_absolute(path) {
            return Some(path.to_string());
        }

        Some(format!(
            "{}/{}",
            self.origin,
            path.trim_start_matches('/')
        ))
    }

    pub fn resolve_media(&self, media: Media) -> Media {
        Media {
            url: media.url.as_deref().and_then(|url| self.resolve(url)),
        }
    }

    /// 沒有可用 URL 時整個欄位視為不存在
    pub fn resolve_optional(&self, media: Option<Media>) -> Option<Media> {
        media
            .map(|m| self.resolve_media(m))
            .filter(Media::has_url)
    }

    /// 解析並丟棄無法解析的項目
    pub fn resolve_all(&self, media: Vec<Media>) -> Vec<Media> {
        media
            .into_iter()
            .map(|m| self.resolve_media(m))
            .filter(Media::has_url)
            .collect()
    }
}

fn is_absolute(path: &str) -> bool {
    let lower = path.get(..8).unwrap_or(path).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_gets_origin() {
        let resolver = MediaResolver::new("http://host:1337");
        assert_eq!(
            resolver.resolve("/uploads/a.png").as_deref(),
            Some("http://host:1337/uploads/a.png")
        );
    }

    #[test]
    fn test_single_slash_between_origin_and_path() {
        let resolver = MediaResolver::new("http://host:1337/");
        assert_eq!(
            resolver.resolve("/uploads/a.png").as_deref(),
            Some("http://host:1337/uploads/a.png")
        );
        assert_eq!(
            resolver.resolve("uploads/a.png").as_deref(),
            Some("http://host:1337/uploads/a.png")
        );
        assert_eq!(
            resolver.resolve("//uploads/a.png").as_deref(),
            Some("http://host:1337/uploads/a.png")
        );
    }

    #[test]
    fn test_absolute_url_is_unchanged_and_idempotent() {
        let resolver = MediaResolver::new("http://host:1337");
        let absolute = "https://images.unsplash.com/photo-1?q=80";
        assert_eq!(resolver.resolve(absolute).as_deref(), Some(absolute));

        let once = resolver.resolve("/uploads/a.png").unwrap();
        let twice = resolver.resolve(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_path_resolves_to_none() {
        let resolver = MediaResolver::new("http://host:1337");
        assert_eq!(resolver.resolve(""), None);
        assert_eq!(resolver.resolve("   "), None);
        assert_eq!(resolver.resolve_media(Media::default()), Media::default());
    }

    #[test]
    fn test_resolve_optional_and_all() {
        let resolver = MediaResolver::new("http://host:1337");
        assert_eq!(resolver.resolve_optional(Some(Media::default())), None);
        assert_eq!(resolver.resolve_optional(None), None);
        assert_eq!(
            resolver.resolve_optional(Some(Media::new("/a.jpg"))),
            Some(Media::new("http://host:1337/a.jpg"))
        );

        let all = resolver.resolve_all(vec![
            Media::new("/a.jpg"),
            Media::default(),
            Media::new("https://cdn.example.com/b.jpg"),
        ]);
        assert_eq!(
            all,
            vec![
                Media::new("http://host:1337/a.jpg"),
                Media::new("https://cdn.example.com/b.jpg"),
            ]
        );
    }
}
