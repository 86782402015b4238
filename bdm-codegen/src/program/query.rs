use bdm_model::{BusinessObject, Query};

use crate::builder::{MethodSpec, ParamSpec, TypeRef};

/// Implicit offset parameter of sequence queries.
pub const START_INDEX: &str = "startIndex";

/// Implicit page size parameter of sequence queries.
pub const MAX_RESULTS: &str = "maxResults";

/// A DAO method signature synthesized from a declared query.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    pub name: String,
    pub return_type: TypeRef,
    pub params: Vec<ParamSpec>,
}

impl Signature {
    pub fn into_method(self) -> MethodSpec {
        MethodSpec::new(self.name)
            .params(self.params)
            .returns(self.return_type)
    }
}

/// The pagination parameters appended to every sequence-returning finder.
pub(crate) fn pagination_params() -> [ParamSpec; 2] {
    [
        ParamSpec::new(START_INDEX, TypeRef::int()),
        ParamSpec::new(MAX_RESULTS, TypeRef::int()),
    ]
}

/// Build the DAO signature for `query` declared on `bo`.
///
/// Parameter class names are used as given. The query text is not inspected.
pub fn build_signature(query: &Query, bo: &BusinessObject) -> Signature {
    let entity = TypeRef::named(&bo.qualified_name);
    let mut params: Vec<ParamSpec> = query
        .parameters
        .iter()
        .map(|p| ParamSpec::new(&p.name, TypeRef::named(&p.class_name)))
        .collect();

    let return_type = if query.returns_sequence() {
        params.extend(pagination_params());
        TypeRef::array(entity)
    } else {
        entity
    };

    Signature {
        name: query.name.clone(),
        return_type,
        params,
    }
}
