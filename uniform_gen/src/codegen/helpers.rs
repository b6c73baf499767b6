use uniform_types::{CollectionKind, FunctionFamily, Signature, WrapStyle};

/* Leading block of every generated module */
pub const HEADER: &str = "
/**
 * This file is auto generated by the uniform-gen tool.
 * Do not edit manually - or you will be sad.
 */

import type { UNIFORM_TYPES } from '../rendering/renderers/shared/shader/types';
";

/* Parameter list used inside generated function literals */
pub fn signature_params(signature: Signature) -> &'static str {
    match signature {
        Signature::Uniform => "name:string, cu:any, cv:any, v:any, ud:any, uv:any, gl:any",
        Signature::Ubo => "name:string, data:Float32Array, offset:number, uv:any, v:any",
    }
}

/* Name of the exported function type alias */
pub fn signature_alias(signature: Signature) -> &'static str {
    match signature {
        Signature::Uniform => "UniformUploadFunction",
        Signature::Ubo => "UboUploadFunction",
    }
}

/* Type alias declaration line for a module */
pub fn alias_declaration(signature: Signature) -> &'static str {
    match signature {
        Signature::Uniform => {
            "export type UniformUploadFunction = (name: string, cu: any, cv: any, v: any, ud: any, uv: any, gl: any) => void;"
        }
        Signature::Ubo => {
            "export type UboUploadFunction = (name:string, data:Float32Array, offset:number, uv:any, v:any) => void;"
        }
    }
}

/* Head of a function literal, up to the body block */
pub fn literal_head(signature: Signature, style: WrapStyle) -> String {
    let params = signature_params(signature);
    match style {
        WrapStyle::MethodShorthand => format!("function({}):void", params),
        WrapStyle::Arrow => format!("({}):void =>", params),
    }
}

/* Opening declaration of a family's exported collection */
pub fn collection_opening(family: FunctionFamily) -> String {
    let alias = signature_alias(family.signature());
    match family.collection_kind() {
        CollectionKind::Table => format!(
            "export const {}:Record<UNIFORM_TYPES|string, {}> = {{",
            family.collection_name(),
            alias
        ),
        CollectionKind::List => format!("export const {}:{}[] = [", family.collection_name(), alias),
    }
}

/* Closing line of a family's exported collection */
pub fn collection_closing(family: FunctionFamily) -> &'static str {
    match (family.collection_kind(), family.signature()) {
        /* Uniform setter tables are followed by a blank line */
        (CollectionKind::Table, Signature::Uniform) => "};\n",
        (CollectionKind::Table, Signature::Ubo) => "};",
        (CollectionKind::List, _) => "];",
    }
}
