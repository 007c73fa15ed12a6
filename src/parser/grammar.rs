//! The grammar table itself: one entry per [`NonTerminal`], each an ordered
//! list of alternatives to try. Alternative order matters — the parser
//! commits to the first one that fully matches, so more specific
//! alternatives are listed before more general ones.

use crate::token::TokenKind;

use super::cst::NonTerminal;
use super::cst::NonTerminal::*;

/// One element of a grammar alternative: either a terminal (a token kind,
/// optionally pinned to an exact lexeme) or a nested non-terminal.
#[derive(Debug, Clone, Copy)]
pub enum GrammarElement {
    Term(TokenKind, Option<&'static str>),
    Sub(NonTerminal),
}

fn any(kind: TokenKind) -> GrammarElement {
    GrammarElement::Term(kind, None)
}

fn lit(kind: TokenKind, value: &'static str) -> GrammarElement {
    GrammarElement::Term(kind, Some(value))
}

fn kw(value: &'static str) -> GrammarElement {
    lit(TokenKind::Keyword, value)
}

fn nt(n: NonTerminal) -> GrammarElement {
    GrammarElement::Sub(n)
}

/// The alternatives for one non-terminal, in the order the parser should
/// try them.
pub fn alternatives(n: NonTerminal) -> Vec<Vec<GrammarElement>> {
    match n {
        Number => vec![
            vec![any(TokenKind::Number), any(TokenKind::Dot), any(TokenKind::Number)],
            vec![any(TokenKind::Number)],
        ],

        FieldAccessTail => vec![
            vec![any(TokenKind::Dot), any(TokenKind::Identifier), nt(FieldAccessTail)],
            vec![
                any(TokenKind::LBracket),
                nt(Expression),
                any(TokenKind::RBracket),
                nt(FieldAccessTail),
            ],
            vec![],
        ],

        FieldAccess => vec![
            vec![
                any(TokenKind::Identifier),
                any(TokenKind::Dot),
                any(TokenKind::Identifier),
                nt(FieldAccessTail),
            ],
            vec![
                any(TokenKind::Identifier),
                any(TokenKind::LBracket),
                nt(Expression),
                any(TokenKind::RBracket),
                nt(FieldAccessTail),
            ],
        ],

        Value => vec![
            vec![nt(FieldAccess)],
            vec![nt(Number)],
            vec![any(TokenKind::CharLiteral)],
            vec![any(TokenKind::StringLiteral)],
            vec![kw("benar")],
            vec![kw("salah")],
            vec![any(TokenKind::Identifier)],
        ],

        MultiplicativeOperator => vec![
            vec![lit(TokenKind::MultiplicativeOperator, "*")],
            vec![lit(TokenKind::MultiplicativeOperator, "/")],
            vec![lit(TokenKind::MultiplicativeOperator, "bagi")],
            vec![lit(TokenKind::MultiplicativeOperator, "mod")],
            vec![lit(TokenKind::LogicalOperator, "dan")],
        ],

        AdditiveOperator => vec![
            vec![lit(TokenKind::LogicalOperator, "atau")],
            vec![lit(TokenKind::AdditiveOperator, "+")],
            vec![lit(TokenKind::AdditiveOperator, "-")],
        ],

        RelationalOperator => vec![
            vec![lit(TokenKind::RelationalOperator, "<>")],
            vec![lit(TokenKind::RelationalOperator, "<")],
            vec![lit(TokenKind::RelationalOperator, "<=")],
            vec![lit(TokenKind::RelationalOperator, ">")],
            vec![lit(TokenKind::RelationalOperator, ">=")],
            vec![lit(TokenKind::RelationalOperator, "=")],
        ],

        ParameterListTail => vec![
            vec![any(TokenKind::Comma), nt(Expression), nt(ParameterListTail)],
            vec![],
        ],

        ParameterList => vec![vec![nt(Expression), nt(ParameterListTail)]],

        Call => vec![
            vec![
                any(TokenKind::Identifier),
                any(TokenKind::LParen),
                nt(ParameterList),
                any(TokenKind::RParen),
            ],
            vec![any(TokenKind::Identifier), any(TokenKind::LParen), any(TokenKind::RParen)],
        ],

        Factor => vec![
            vec![nt(Call)],
            vec![nt(Value)],
            vec![any(TokenKind::LParen), nt(Expression), any(TokenKind::RParen)],
            vec![lit(TokenKind::LogicalOperator, "tidak"), nt(Factor)],
        ],

        TermTail => vec![
            vec![nt(MultiplicativeOperator), nt(Factor), nt(TermTail)],
            vec![],
        ],

        Term => vec![vec![nt(Factor), nt(TermTail)]],

        SimpleExpressionTail => vec![
            vec![nt(AdditiveOperator), nt(Term), nt(SimpleExpressionTail)],
            vec![],
        ],

        SimpleExpression => vec![
            vec![lit(TokenKind::AdditiveOperator, "+"), nt(Term), nt(SimpleExpressionTail)],
            vec![lit(TokenKind::AdditiveOperator, "-"), nt(Term), nt(SimpleExpressionTail)],
            vec![nt(Term), nt(SimpleExpressionTail)],
        ],

        Expression => vec![
            vec![nt(SimpleExpression), nt(RelationalOperator), nt(SimpleExpression)],
            vec![nt(SimpleExpression)],
        ],

        AssignmentStatement => vec![
            vec![any(TokenKind::Identifier), any(TokenKind::AssignOperator), nt(Expression)],
            vec![nt(FieldAccess), any(TokenKind::AssignOperator), nt(Expression)],
        ],

        EmptyStatement => vec![vec![]],

        ExpressionStatement => vec![vec![nt(Expression)]],

        IfStatement => vec![
            vec![
                kw("jika"),
                nt(Expression),
                kw("maka"),
                nt(Statement),
                kw("selain-itu"),
                nt(Statement),
            ],
            vec![kw("jika"), nt(Expression), kw("maka"), nt(Statement)],
        ],

        WhileStatement => vec![vec![kw("selama"), nt(Expression), kw("lakukan"), nt(Statement)]],

        ForStatement => vec![
            vec![
                kw("untuk"),
                any(TokenKind::Identifier),
                any(TokenKind::AssignOperator),
                nt(Expression),
                kw("ke"),
                nt(Expression),
                kw("lakukan"),
                nt(Statement),
            ],
            vec![
                kw("untuk"),
                any(TokenKind::Identifier),
                any(TokenKind::AssignOperator),
                nt(Expression),
                kw("turun-ke"),
                nt(Expression),
                kw("lakukan"),
                nt(Statement),
            ],
        ],

        RepeatStatement => vec![vec![kw("ulangi"), nt(StatementList), kw("sampai"), nt(Expression)]],

        CaseElement => vec![vec![nt(Expression), any(TokenKind::Colon), nt(Statement)]],

        CaseListTail => vec![
            vec![any(TokenKind::Semicolon), nt(CaseElement), nt(CaseListTail)],
            vec![any(TokenKind::Semicolon)],
            vec![],
        ],

        CaseList => vec![vec![nt(CaseElement), nt(CaseListTail)]],

        CaseStatement => vec![vec![
            kw("kasus"),
            nt(Expression),
            kw("dari"),
            nt(CaseList),
            kw("selesai"),
        ]],

        CompoundStatement => vec![vec![kw("mulai"), nt(StatementList), kw("selesai")]],

        Statement => vec![
            vec![nt(AssignmentStatement)],
            vec![nt(IfStatement)],
            vec![nt(WhileStatement)],
            vec![nt(ForStatement)],
            vec![nt(RepeatStatement)],
            vec![nt(CaseStatement)],
            vec![nt(CompoundStatement)],
            vec![nt(ExpressionStatement)],
            vec![nt(EmptyStatement)],
        ],

        StatementListTail => vec![
            vec![any(TokenKind::Semicolon), nt(Statement), nt(StatementListTail)],
            vec![],
        ],

        StatementList => vec![vec![nt(Statement), nt(StatementListTail)]],

        Range => vec![vec![nt(Expression), any(TokenKind::RangeOperator), nt(Expression)]],

        ArrayType => vec![vec![
            kw("larik"),
            any(TokenKind::LBracket),
            nt(Range),
            any(TokenKind::RBracket),
            kw("dari"),
            nt(Type),
        ]],

        Type => vec![
            vec![kw("integer")],
            vec![kw("real")],
            vec![kw("boolean")],
            vec![kw("char")],
            vec![kw("string")],
            vec![nt(ArrayType)],
            vec![any(TokenKind::Identifier)],
        ],

        IdentifierListTail => vec![
            vec![any(TokenKind::Comma), any(TokenKind::Identifier), nt(IdentifierListTail)],
            vec![],
        ],

        IdentifierList => vec![vec![any(TokenKind::Identifier), nt(IdentifierListTail)]],

        VarItemTail => vec![vec![nt(VarItem), nt(VarItemTail)], vec![]],

        VarItem => vec![vec![
            nt(IdentifierList),
            any(TokenKind::Colon),
            nt(TypeDefinition),
            any(TokenKind::Semicolon),
        ]],

        VarDeclaration => vec![vec![kw("variabel"), nt(VarItem), nt(VarItemTail)]],

        VarSection => vec![vec![nt(VarDeclaration), nt(VarSection)], vec![]],

        FieldListTail => vec![vec![any(TokenKind::Semicolon), nt(FieldList)], vec![]],

        FieldList => vec![vec![
            nt(IdentifierList),
            any(TokenKind::Colon),
            nt(TypeDefinition),
            nt(FieldListTail),
        ]],

        RecordType => vec![vec![kw("rekaman"), nt(FieldList), kw("selesai")]],

        TypeDefinition => vec![vec![nt(Type)], vec![nt(ArrayType)], vec![nt(RecordType)]],

        TypeItemTail => vec![vec![nt(TypeItem), nt(TypeItemTail)], vec![]],

        TypeItem => vec![vec![
            any(TokenKind::Identifier),
            lit(TokenKind::RelationalOperator, "="),
            nt(TypeDefinition),
            any(TokenKind::Semicolon),
        ]],

        TypeDeclaration => vec![vec![kw("tipe"), nt(TypeItem), nt(TypeItemTail)]],

        TypeSection => vec![vec![nt(TypeDeclaration), nt(TypeSection)], vec![]],

        ConstItemTail => vec![vec![nt(ConstItem), nt(ConstItemTail)], vec![]],

        ConstItem => vec![vec![
            any(TokenKind::Identifier),
            lit(TokenKind::RelationalOperator, "="),
            nt(Value),
            any(TokenKind::Semicolon),
        ]],

        ConstDeclaration => vec![vec![kw("konstanta"), nt(ConstItem), nt(ConstItemTail)]],

        ConstSection => vec![vec![nt(ConstDeclaration), nt(ConstSection)], vec![]],

        ParameterModifier => vec![vec![kw("variabel")], vec![]],

        ParameterGroupTail => vec![
            vec![any(TokenKind::Semicolon), nt(ParameterGroup), nt(ParameterGroupTail)],
            vec![any(TokenKind::Semicolon)],
            vec![],
        ],

        ParameterGroup => vec![vec![
            nt(ParameterModifier),
            nt(IdentifierList),
            any(TokenKind::Colon),
            nt(Type),
        ]],

        FormalParameterList => vec![vec![
            any(TokenKind::LParen),
            nt(ParameterGroup),
            nt(ParameterGroupTail),
            any(TokenKind::RParen),
        ]],

        Block => vec![vec![nt(DeclarationPart), nt(CompoundStatement)]],

        FunctionDeclaration => vec![
            vec![
                kw("fungsi"),
                any(TokenKind::Identifier),
                nt(FormalParameterList),
                any(TokenKind::Colon),
                nt(Type),
                any(TokenKind::Semicolon),
                nt(Block),
                any(TokenKind::Semicolon),
            ],
            vec![
                kw("fungsi"),
                any(TokenKind::Identifier),
                any(TokenKind::Colon),
                nt(Type),
                any(TokenKind::Semicolon),
                nt(Block),
                any(TokenKind::Semicolon),
            ],
        ],

        ProcedureDeclaration => vec![
            vec![
                kw("prosedur"),
                any(TokenKind::Identifier),
                nt(FormalParameterList),
                any(TokenKind::Semicolon),
                nt(Block),
                any(TokenKind::Semicolon),
            ],
            vec![
                kw("prosedur"),
                any(TokenKind::Identifier),
                any(TokenKind::Semicolon),
                nt(Block),
                any(TokenKind::Semicolon),
            ],
        ],

        SubprogramDeclaration => vec![
            vec![nt(ProcedureDeclaration)],
            vec![nt(FunctionDeclaration)],
        ],

        SubprogramSection => vec![
            vec![nt(SubprogramDeclaration), nt(SubprogramSection)],
            vec![],
        ],

        DeclarationPart => vec![vec![
            nt(ConstSection),
            nt(TypeSection),
            nt(VarSection),
            nt(SubprogramSection),
        ]],

        ProgramHeader => vec![vec![
            kw("program"),
            any(TokenKind::Identifier),
            any(TokenKind::Semicolon),
        ]],

        Program => vec![vec![
            nt(ProgramHeader),
            nt(DeclarationPart),
            nt(CompoundStatement),
            any(TokenKind::Dot),
        ]],
    }
}
