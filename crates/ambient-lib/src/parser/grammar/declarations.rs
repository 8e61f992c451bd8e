use rowan::Checkpoint;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{
    DECLARATOR_INIT_END, DECLARATOR_TYPE_END, ENUM_MEMBER_NAME, HERITAGE_END, LIST_ITEM_END,
    STATEMENT_END,
};

impl Parser<'_> {
    /// `var a: T, b = 1;`
    pub(super) fn parse_variable_statement(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::VariableStatement);
        self.bump_keyword();

        loop {
            self.parse_variable_declarator();
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }

        self.expect_semicolon();
        self.finish_node();
    }

    fn parse_variable_declarator(&mut self) {
        self.start_node(SyntaxKind::VariableDeclarator);
        self.parse_binding();
        self.eat_token(SyntaxKind::Bang);
        if self.currently_is(SyntaxKind::Colon) {
            self.parse_type_annotation(DECLARATOR_TYPE_END);
        }
        if self.currently_is(SyntaxKind::Equals) {
            self.parse_initializer(DECLARATOR_INIT_END);
        }
        self.finish_node();
    }

    /// `function f<T>(a: T): R;`, name optional after `export default`.
    pub(super) fn parse_function(&mut self, checkpoint: Checkpoint, anonymous_ok: bool) {
        self.start_node_at(checkpoint, SyntaxKind::FunctionDeclaration);
        self.bump_remap(SyntaxKind::KwFunction);
        self.eat_token(SyntaxKind::Star);

        if self.currently_is(SyntaxKind::Ident) {
            self.parse_name();
        } else if !anonymous_ok {
            self.error(DiagnosticKind::ExpectedName);
        }

        if self.currently_is(SyntaxKind::LAngle) {
            self.parse_type_parameters();
        }
        if self.currently_is(SyntaxKind::ParenOpen) {
            self.parse_parameters();
        } else {
            self.error_msg(DiagnosticKind::UnexpectedToken, "expected `(`");
        }
        if self.currently_is(SyntaxKind::Colon) {
            self.parse_type_annotation(STATEMENT_END);
        }

        self.expect_semicolon();
        self.finish_node();
    }

    /// `class C<T> extends B implements I { .. }`
    pub(super) fn parse_class(&mut self, checkpoint: Checkpoint, anonymous_ok: bool) {
        self.start_node_at(checkpoint, SyntaxKind::ClassDeclaration);
        self.bump_remap(SyntaxKind::KwClass);

        if self.currently_is(SyntaxKind::Ident)
            && !self.at_word("extends")
            && !self.at_word("implements")
        {
            self.parse_name();
        } else if !anonymous_ok {
            self.error(DiagnosticKind::ExpectedName);
        }

        if self.currently_is(SyntaxKind::LAngle) {
            self.parse_type_parameters();
        }
        while self.at_word("extends") || self.at_word("implements") {
            self.parse_heritage_clause();
        }

        if self.currently_is(SyntaxKind::BraceOpen) {
            self.parse_braced_body(SyntaxKind::ClassBody);
        } else {
            self.error_msg(DiagnosticKind::UnexpectedToken, "expected class body `{`");
        }
        self.finish_node();
    }

    /// `interface I<T> extends A, B { .. }`
    pub(super) fn parse_interface(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::InterfaceDeclaration);
        self.bump_remap(SyntaxKind::KwInterface);
        self.parse_name();

        if self.currently_is(SyntaxKind::LAngle) {
            self.parse_type_parameters();
        }
        while self.at_word("extends") {
            self.parse_heritage_clause();
        }

        if self.currently_is(SyntaxKind::BraceOpen) {
            self.parse_braced_body(SyntaxKind::ObjectTypeBody);
        } else {
            self.error_msg(DiagnosticKind::UnexpectedToken, "expected interface body `{`");
        }
        self.finish_node();
    }

    fn parse_heritage_clause(&mut self) {
        self.start_node(SyntaxKind::HeritageClause);
        self.bump_keyword();
        loop {
            self.parse_type_expr(HERITAGE_END);
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
        self.finish_node();
    }

    /// `type A<T> = ..;`
    pub(super) fn parse_type_alias(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::TypeAliasDeclaration);
        self.bump_remap(SyntaxKind::KwType);
        self.parse_name();

        if self.currently_is(SyntaxKind::LAngle) {
            self.parse_type_parameters();
        }
        if self.expect(SyntaxKind::Equals, "`=`") {
            self.parse_type_expr(STATEMENT_END);
        }

        self.expect_semicolon();
        self.finish_node();
    }

    /// `[const] enum E { A, B = 1, "c" }`
    pub(super) fn parse_enum(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::EnumDeclaration);
        self.eat_keyword("const", SyntaxKind::KwConst);
        self.bump_remap(SyntaxKind::KwEnum);
        self.parse_name();

        if self.currently_is(SyntaxKind::BraceOpen) {
            self.parse_enum_body();
        } else {
            self.error_msg(DiagnosticKind::UnexpectedToken, "expected enum body `{`");
        }
        self.finish_node();
    }

    fn parse_enum_body(&mut self) {
        self.start_node(SyntaxKind::EnumBody);
        let open = self.current_span();
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();

        while !self.at_end() && !self.currently_is(SyntaxKind::BraceClose) {
            if !self.currently_is_one_of(ENUM_MEMBER_NAME) {
                self.error_and_bump_msg(DiagnosticKind::ExpectedName, "enum member");
                continue;
            }
            self.parse_enum_member();
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }

        self.pop_delimiter();
        if !self.eat_token(SyntaxKind::BraceClose) {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedBrace,
                "enum body opened here",
                open,
            );
        }
        self.finish_node();
    }

    fn parse_enum_member(&mut self) {
        self.start_node(SyntaxKind::EnumMember);
        match self.current() {
            SyntaxKind::Ident => self.parse_name(),
            SyntaxKind::StringLiteral | SyntaxKind::Number => {
                self.start_node(SyntaxKind::Name);
                self.bump();
                self.finish_node();
            }
            _ => {
                // Computed member name: `[expr]`.
                self.bump();
                self.skip_expression(LIST_ITEM_END);
                self.expect(SyntaxKind::BracketClose, "`]`");
            }
        }
        if self.currently_is(SyntaxKind::Equals) {
            self.parse_initializer(LIST_ITEM_END);
        }
        self.finish_node();
    }
}
