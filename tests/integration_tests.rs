// Integration tests for the library: parsing a Swagger file, converting it into contracts
// and comparing JSON structures from the sample files.

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use std::fs;
    use std::path::PathBuf;
    use swagger_contract_converter::json::{JsonError, JsonSide};
    use swagger_contract_converter::{
        compare_json_files, AppError, convert_swagger_file, parse_swagger_file, Contract, ContractConverter, OutputFormat,
        SwaggerContractConverter,
    };

    fn get_test_data_path(file_name: &str) -> PathBuf {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("tests");
        path.push("samples");
        path.push(file_name);
        path
    }

    fn convert_rocket_shop() -> Vec<Contract> {
        SwaggerContractConverter::new()
            .convert_from(&get_test_data_path("rocket_shop.yaml"))
            .unwrap()
    }

    #[test]
    fn test_parse_swagger_file() {
        let document = parse_swagger_file(get_test_data_path("rocket_shop.yaml")).unwrap();

        assert_eq!(document.base_path.as_deref(), Some("/api"));
        let all_operations: usize = document.paths.iter().map(|p| p.operations.len()).sum();
        assert_eq!(all_operations, 4);
        assert_eq!(document.definitions.as_ref().map(|d| d.len()), Some(2));
    }

    #[test]
    fn test_ignored_operations_are_dropped() {
        let contracts = convert_rocket_shop();

        let names: Vec<&str> = contracts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["1_rockets_GET_listRockets", "2_rockets_POST_addRocket", "3_rockets_rocketId_GET"]
        );
    }

    #[test]
    fn test_query_parameters_and_array_body() {
        let contracts = convert_rocket_shop();
        let list = &contracts[0];

        assert_eq!(list.label.as_deref(), Some("rockets"));
        assert_eq!(list.request.url_path, "/api/rockets");
        let query: Vec<(&str, &Value)> = list
            .request
            .query_parameters
            .iter()
            .map(|q| (q.name.as_str(), &q.value))
            .collect();
        assert_eq!(query, vec![("fuel", &json!("KEROSENE")), ("limit", &json!(10))]);
        assert!(list.request.header("X-Debug").is_none());

        assert_eq!(list.response.status, 200);
        assert_eq!(list.response.header("Content-Type"), Some(&json!("application/json")));
        let body: Value = serde_json::from_str(list.response.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!([{ "name": "name", "stages": 2, "fuel": "KEROSENE" }]));
    }

    #[test]
    fn test_request_body_from_example_file() {
        let contracts = convert_rocket_shop();
        let add = &contracts[1];

        assert_eq!(add.label.as_deref(), Some("rockets_admin"));
        assert_eq!(add.request.header("Content-Type"), Some(&json!("application/json")));
        let body: Value = serde_json::from_str(add.request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({ "name": "Falcon", "stages": 2, "fuel": "KEROSENE" }));
        assert_eq!(add.response.status, 201);
        assert_eq!(add.response.body, None);
    }

    #[test]
    fn test_path_parameter_example() {
        let contracts = convert_rocket_shop();
        let get = &contracts[2];

        assert_eq!(get.request.url_path, "/api/rockets/falcon9");
        assert_eq!(get.priority, 3);
        let body: Value = serde_json::from_str(get.response.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["fuel"], json!("KEROSENE"));
    }

    #[test]
    fn test_example_file_with_other_shape_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let swagger = fs::read_to_string(get_test_data_path("rocket_shop.yaml")).unwrap();
        fs::write(dir.path().join("rocket_shop.yaml"), swagger).unwrap();
        fs::write(dir.path().join("rocket_example.json"), r#"{ "name": "Falcon" }"#).unwrap();

        let result = SwaggerContractConverter::new().convert_from(&dir.path().join("rocket_shop.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_convert_writes_yaml_contracts() {
        let output_dir = tempfile::tempdir().unwrap();

        let written = convert_swagger_file(get_test_data_path("rocket_shop.yaml"), output_dir.path(), OutputFormat::Yaml).unwrap();

        assert_eq!(written.len(), 3);
        let first = output_dir.path().join("1_rockets_GET_listRockets.yaml");
        assert_eq!(written[0], first);

        let contract: Contract = serde_yaml::from_str(&fs::read_to_string(&first).unwrap()).unwrap();
        assert_eq!(contract.name, "1_rockets_GET_listRockets");
        assert_eq!(contract.request.method, "GET");
    }

    #[test]
    fn test_convert_writes_json_contracts() {
        let output_dir = tempfile::tempdir().unwrap();

        let written = convert_swagger_file(get_test_data_path("rocket_shop.yaml"), output_dir.path(), OutputFormat::Json).unwrap();

        let content = fs::read_to_string(&written[2]).unwrap();
        let contract: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(contract["request"]["urlPath"], json!("/api/rockets/falcon9"));
        assert_eq!(contract["priority"], json!(3));
    }

    #[test]
    fn test_is_accepted() {
        let converter = SwaggerContractConverter::new();
        assert!(converter.is_accepted(&get_test_data_path("rocket_shop.yaml")));
        assert!(!converter.is_accepted(&get_test_data_path("not_swagger.yaml")));
        assert!(!converter.is_accepted(&get_test_data_path("missing.yaml")));
    }

    #[test]
    fn test_compare_ignores_values_and_array_sizes() {
        let equal = compare_json_files(
            get_test_data_path("coffee_rocket.json"),
            get_test_data_path("coffee_rocket_other_values.json"),
        )
        .unwrap();
        assert!(equal);
    }

    #[test]
    fn test_compare_detects_extra_fields() {
        let equal = compare_json_files(
            get_test_data_path("coffee_rocket.json"),
            get_test_data_path("coffee_rocket_more_fields.json"),
        )
        .unwrap();
        assert!(!equal);
    }

    #[test]
    fn test_compare_reports_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ \"name\": ").unwrap();

        let err = compare_json_files(get_test_data_path("coffee_rocket.json"), &broken).unwrap_err();
        assert!(
            matches!(err, AppError::JsonError(JsonError::Parse { side: JsonSide::Actual, .. })),
            "unexpected error: {}",
            err
        );
        assert_eq!(err.to_string(), "JSON error: Could not parse JSON of file!");
    }
}
