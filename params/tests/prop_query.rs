use params::{Charset, FormData, Limits, Parameters};
use proptest::prelude::*;

fn pairs_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::vec((any::<String>(), any::<String>()), 0..8)
}

fn parameters_from(pairs: &[(String, String)]) -> Parameters {
    let mut params = Parameters::new();
    for (name, value) in pairs {
        params.append(name.clone(), value.clone());
    }
    params
}

proptest! {
    #[test]
    fn query_roundtrip(pairs in pairs_strategy()) {
        let params = parameters_from(&pairs);
        let parsed = Parameters::from_query(&params.to_query(), &Limits::unlimited()).unwrap();
        prop_assert_eq!(parsed, params);
    }

    #[test]
    fn form_body_matches_query_parse(pairs in pairs_strategy()) {
        let params = parameters_from(&pairs);
        let query = params.to_query();
        let form = FormData::from_urlencoded(query.as_bytes(), &Limits::unlimited()).unwrap();

        let mut from_form = Parameters::new();
        for item in &form {
            from_form.append(item.field_name.clone(), item.string(Charset::Utf8).unwrap());
        }
        prop_assert_eq!(from_form, params);
    }

    #[test]
    fn arbitrary_bodies_never_panic(body in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = FormData::from_urlencoded(&body, &Limits::for_testing());
    }
}
