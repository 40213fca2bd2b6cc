//! First pass: register every declaration in the symbol table.

use super::{Analyzer, Child, ScopePath, children};
use crate::frontend::ast::*;
use crate::frontend::diagnostics::errors;
use crate::frontend::symbols::{Symbol, SymbolKind};

impl Analyzer {
    pub(super) fn collect_statements<'p>(&mut self, statements: &'p [Statement], scope: ScopePath<'p>) {
        for statement in statements {
            self.collect_statement(statement, scope);
        }
    }

    fn collect_statement<'p>(&mut self, statement: &'p Statement, scope: ScopePath<'p>) {
        match statement {
            Statement::Function(function) => self.collect_function(function, scope),
            Statement::Class(class) => self.collect_class(class, scope),
            Statement::Variable(variable) => {
                self.declare(scope, &variable.name, SymbolKind::Variable);
                if let Some(value) = &variable.value {
                    self.collect_expression(value, scope);
                }
            }
            Statement::Return(ret) => {
                if let Some(value) = &ret.value {
                    self.collect_expression(value, scope);
                }
            }
            Statement::Expression(stmt) => self.collect_expression(&stmt.expression, scope),
        }
    }

    fn collect_function<'p>(&mut self, function: &'p FunctionDecl, scope: ScopePath<'p>) {
        let symbol = Symbol::new(&function.name.name, SymbolKind::Function, scope.name(), function.name.token.clone())
            .with_static(function.is_static);
        self.define(scope, &function.name, symbol);

        let inner = scope.enter_function(&function.name.name);
        self.collect_parameters(&function.parameters, inner);
        self.collect_statements(&function.body.statements, inner);
    }

    fn collect_class<'p>(&mut self, class: &'p ClassDecl, scope: ScopePath<'p>) {
        let parent = class.parent.as_ref().map(|p| p.name.clone());
        let symbol = Symbol::new(&class.name.name, SymbolKind::Class, scope.name(), class.name.token.clone())
            .with_parent(parent);
        self.define(scope, &class.name, symbol);

        let inner = scope.enter_class(&class.name.name);
        for attribute in &class.attributes {
            self.declare(inner, &attribute.name, SymbolKind::Attribute);
        }
        // Methods are all registered before any body so a body may call a sibling declared after it.
        for method in &class.methods {
            self.declare(inner, &method.name, SymbolKind::Method);
        }
        for method in &class.methods {
            let method_scope = inner.enter_method(&method.name.name);
            self.collect_parameters(&method.parameters, method_scope);
            self.collect_statements(&method.body.statements, method_scope);
        }
    }

    fn collect_parameters(&mut self, parameters: &[Identifier], scope: ScopePath<'_>) {
        for parameter in parameters {
            self.declare(scope, parameter, SymbolKind::Parameter);
        }
    }

    /// Declarations inside `If`/`While`/`For` bodies belong to the enclosing routine.
    fn collect_expression<'p>(&mut self, expression: &'p Expression, scope: ScopePath<'p>) {
        for child in children(expression) {
            match child {
                Child::Expression(e) => self.collect_expression(e, scope),
                Child::Block(b) => self.collect_statements(&b.statements, scope),
            }
        }
    }

    fn declare(&mut self, scope: ScopePath<'_>, name: &Identifier, kind: SymbolKind) {
        let symbol = Symbol::new(&name.name, kind, scope.name(), name.token.clone());
        self.define(scope, name, symbol);
    }

    /// Register `symbol` under `name`. Names the parser could not read were already reported and are skipped.
    fn define(&mut self, scope: ScopePath<'_>, name: &Identifier, symbol: Symbol) {
        if name.is_missing() {
            return;
        }
        let key = scope.key(&name.name);
        if let Err(first) = self.symbols.define(key, symbol) {
            tracing::trace!(name = %name.name, line = name.token.line, "redeclaration");
            let diagnostic = errors::redeclared(&name.name, &name.token, &first.token);
            self.diagnostics.push(diagnostic);
        }
    }
}
