//! Second pass: resolve every identifier reference.

use super::{Analyzer, Child, ScopePath, children};
use crate::frontend::ast::*;
use crate::frontend::diagnostics::errors;

impl Analyzer {
    pub(super) fn check_statements<'p>(&mut self, statements: &'p [Statement], scope: ScopePath<'p>) {
        for statement in statements {
            self.check_statement(statement, scope);
        }
    }

    fn check_statement<'p>(&mut self, statement: &'p Statement, scope: ScopePath<'p>) {
        match statement {
            Statement::Function(function) => {
                let inner = scope.enter_function(&function.name.name);
                self.check_statements(&function.body.statements, inner);
            }
            Statement::Class(class) => {
                let inner = scope.enter_class(&class.name.name);
                for method in &class.methods {
                    self.check_statements(&method.body.statements, inner.enter_method(&method.name.name));
                }
            }
            Statement::Variable(VariableDecl { value, .. }) | Statement::Return(ReturnStmt { value, .. }) => {
                if let Some(value) = value {
                    self.check_expression(value, scope);
                }
            }
            Statement::Expression(stmt) => self.check_expression(&stmt.expression, scope),
        }
    }

    fn check_expression<'p>(&mut self, expression: &'p Expression, scope: ScopePath<'p>) {
        match expression {
            Expression::Identifier(identifier) => self.check_reference(identifier, scope),
            Expression::For(f) => self.check_reference(&f.counter, scope),
            _ => {}
        }

        for child in children(expression) {
            match child {
                Child::Expression(e) => self.check_expression(e, scope),
                Child::Block(b) => self.check_statements(&b.statements, scope),
            }
        }
    }

    fn check_reference(&mut self, identifier: &Identifier, scope: ScopePath<'_>) {
        if identifier.is_missing() || (identifier.is_self() && scope.in_method()) {
            return;
        }
        if self.resolves(&identifier.name, scope) {
            return;
        }
        tracing::trace!(name = %identifier.name, scope = %scope.name(), "unresolved identifier");
        self.diagnostics.push(errors::undeclared(&identifier.name, &identifier.token));
    }
}
