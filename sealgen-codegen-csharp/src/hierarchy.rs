//! Re-opening nested type declarations.

use sealgen_codegen::{CodeBuilder, Scope};
use sealgen_ir::TypeScope;

/// Open every scope of `hierarchy`, outer-to-inner.
///
/// The returned guard closes them innermost-first when dropped, restoring
/// the indentation the builder had before the call.
pub fn open_type_hierarchy<'a>(builder: &'a mut CodeBuilder, hierarchy: &[TypeScope]) -> Scope<'a> {
    let mut scope = builder.scope();
    for level in hierarchy {
        scope.enter(&level.declaration());
    }
    scope
}

#[cfg(test)]
mod tests {
    use sealgen_ir::TypeKind;

    use super::*;

    #[test]
    fn test_empty_hierarchy_writes_nothing() {
        let mut builder = CodeBuilder::csharp();
        {
            let scope = open_type_hierarchy(&mut builder, &[]);
            assert_eq!(scope.depth(), 0);
        }
        assert_eq!(builder.build(), "");
    }

    #[test]
    fn test_nested_hierarchy_is_symmetric() {
        let hierarchy = vec![
            TypeScope {
                is_static: true,
                ..TypeScope::new(TypeKind::Class, "Shapes")
            },
            TypeScope::new(TypeKind::RecordStruct, "Point"),
        ];

        let mut builder = CodeBuilder::csharp();
        builder.push_indent();
        {
            let mut scope = open_type_hierarchy(&mut builder, &hierarchy);
            assert_eq!(scope.current_indent(), 3);
            scope.push_line("int X;");
        }
        assert_eq!(builder.current_indent(), 1);
        assert_eq!(
            builder.build(),
            "    static partial class Shapes\n    {\n        partial record struct Point\n        {\n            int X;\n        }\n    }\n"
        );
    }
}
