use crate::Node;

/// A recognized program. Only ever built from a complete match of the
/// grammar; string literals keep their quotes and escapes.
#[derive(Node!)]
pub struct Program<'src> {
    pub package_name: &'src str,
    pub import: ImportDecl<'src>,
    pub function: FuncDecl<'src>,
}

#[derive(Node!)]
pub struct ImportDecl<'src> {
    pub path: &'src str,
}

#[derive(Node!)]
pub struct FuncDecl<'src> {
    pub name: &'src str,
    pub body: Statement<'src>,
}

/// A `fmt.Println(<string>)` call.
#[derive(Node!)]
pub struct Statement<'src> {
    pub argument: &'src str,
}
