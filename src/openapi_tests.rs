#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::openapi::{schema::Schema, PathItemType, RefOr};
    use utoipa::OpenApi;

    fn object_properties(name: &str) -> Vec<String> {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.expect("components should be generated");
        match components.schemas.get(name) {
            Some(RefOr::T(Schema::Object(obj))) => obj.properties.keys().cloned().collect(),
            _ => panic!("{} should be an object schema", name),
        }
    }

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        let components = openapi.components.as_ref().unwrap();
        for name in [
            "ErrorResponse",
            "HealthResponse",
            "ProductionView",
            "FeedCostsView",
            "RecentEventsView",
            "RenderRequest",
            "RenderedView",
        ] {
            assert!(components.schemas.contains_key(name), "missing schema {}", name);
        }

        assert!(serde_json::to_string(&openapi).is_ok());
    }

    #[test]
    fn test_error_response_schema_structure() {
        let properties = object_properties("ErrorResponse");

        assert!(properties.contains(&"error".to_string()));
        assert!(properties.contains(&"code".to_string()));
        assert!(properties.contains(&"success".to_string()));
    }

    #[test]
    fn test_health_response_schema_structure() {
        let properties = object_properties("HealthResponse");

        assert!(properties.contains(&"status".to_string()));
        assert!(properties.contains(&"version".to_string()));
        assert!(properties.contains(&"cached_uploads".to_string()));
    }

    #[test]
    fn test_openapi_paths_cover_every_page() {
        let openapi = ApiDoc::openapi();
        let paths = &openapi.paths.paths;

        for (path, method, name) in [
            ("/health", PathItemType::Get, "get"),
            ("/api/v1/pages", PathItemType::Get, "get"),
            ("/api/v1/views/render", PathItemType::Post, "post"),
            ("/api/v1/home", PathItemType::Get, "get"),
            ("/api/v1/production", PathItemType::Get, "get"),
            ("/api/v1/production/uploads", PathItemType::Post, "post"),
            ("/api/v1/feed-costs", PathItemType::Get, "get"),
            ("/api/v1/events", PathItemType::Get, "get"),
            ("/api/v1/events", PathItemType::Post, "post"),
        ] {
            let item = paths.get(path).unwrap_or_else(|| panic!("missing path {}", path));
            assert!(item.operations.contains_key(&method), "missing {} {}", name, path);
        }
    }

    #[test]
    fn test_all_error_responses_reference_correct_schema() {
        let openapi_json = serde_json::to_string(&ApiDoc::openapi()).unwrap();

        assert!(!openapi_json.contains("crate.schemas.ErrorResponse"));
        assert!(!openapi_json.contains("crate::schemas::ErrorResponse"));
        assert!(openapi_json.contains("ErrorResponse"));
    }
}
