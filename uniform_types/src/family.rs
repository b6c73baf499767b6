use std::fmt;

/* Bare identifier location-aware bodies use for the uniform's binding slot */
pub const LOCATION_TOKEN: &str = "location";

/* Parameter shape shared by all functions of a generated module */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signature {
    /* (name, cu, cv, v, ud, uv, gl) - immediate-mode uniform upload */
    Uniform,
    /* (name, data, offset, uv, v) - uniform buffer upload */
    Ubo,
}

impl Signature {
    pub fn arity(self) -> usize {
        match self {
            Signature::Uniform => 7,
            Signature::Ubo => 5,
        }
    }
}

/* How a body is wrapped into a function literal */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapStyle {
    /* `function(...):void { ... }` */
    MethodShorthand,
    /* `(...):void => { ... }` */
    Arrow,
}

/* Exported collection kind */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    /* Record keyed by uniform type */
    Table,
    /* Array ordered like its catalog */
    List,
}

/* Category of generated functions sharing a signature and wrapping style */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionFamily {
    SingleSetter,
    ArraySetter,
    UniformParser,
    UboParser,
    UboSingleWgsl,
    UboSingleStd40,
}

impl FunctionFamily {
    pub const ALL: [FunctionFamily; 6] = [
        FunctionFamily::SingleSetter,
        FunctionFamily::ArraySetter,
        FunctionFamily::UniformParser,
        FunctionFamily::UboParser,
        FunctionFamily::UboSingleWgsl,
        FunctionFamily::UboSingleStd40,
    ];

    pub fn signature(self) -> Signature {
        match self {
            FunctionFamily::SingleSetter
            | FunctionFamily::ArraySetter
            | FunctionFamily::UniformParser => Signature::Uniform,
            FunctionFamily::UboParser
            | FunctionFamily::UboSingleWgsl
            | FunctionFamily::UboSingleStd40 => Signature::Ubo,
        }
    }

    pub fn wrap_style(self) -> WrapStyle {
        match self {
            FunctionFamily::SingleSetter | FunctionFamily::ArraySetter => {
                WrapStyle::MethodShorthand
            }
            _ => WrapStyle::Arrow,
        }
    }

    pub fn collection_kind(self) -> CollectionKind {
        match self {
            FunctionFamily::UniformParser | FunctionFamily::UboParser => CollectionKind::List,
            _ => CollectionKind::Table,
        }
    }

    /* Bodies of these families reference the bare `location` identifier */
    pub fn is_location_aware(self) -> bool {
        matches!(
            self,
            FunctionFamily::SingleSetter | FunctionFamily::ArraySetter
        )
    }

    /* Name of the exported collection in the generated module */
    pub fn collection_name(self) -> &'static str {
        match self {
            FunctionFamily::SingleSetter => "uniformSingleParserFunctions",
            FunctionFamily::ArraySetter => "uniformArrayParserFunctions",
            FunctionFamily::UniformParser => "uniformParserFunctions",
            FunctionFamily::UboParser => "uboParserFunctions",
            FunctionFamily::UboSingleWgsl => "uboSingleFunctionsWGSL",
            FunctionFamily::UboSingleStd40 => "uboSingleFunctionsSTD40",
        }
    }

    /* Catalog file stem the family's bodies come from */
    pub fn catalog_name(self) -> &'static str {
        match self {
            FunctionFamily::SingleSetter => "single_setters",
            FunctionFamily::ArraySetter => "array_setters",
            FunctionFamily::UniformParser | FunctionFamily::UboParser => "uniform_parsers",
            FunctionFamily::UboSingleWgsl => "ubo_sync_wgsl",
            FunctionFamily::UboSingleStd40 => "ubo_sync_std40",
        }
    }
}

impl fmt::Display for FunctionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection_name())
    }
}
