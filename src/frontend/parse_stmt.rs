// src/frontend/parse_stmt.rs
//
// Statement parsing. Statements are semicolon-terminated except for the
// brace-closed forms (loops, blocks, nested functions); an expression
// statement that is itself an if/match/block may drop the semicolon.

use crate::frontend::ast::*;
use crate::frontend::parser::{ParseError, Parser};
use crate::frontend::TokenType;

impl<'src> Parser<'src> {
    /// Parse a block: `{ statements }`
    pub(super) fn block(&mut self) -> Result<Block, ParseError> {
        let start_span = self.current().span;
        self.consume(TokenType::LBrace, "expected '{'")?;

        let stmts = self.with_struct_literals(|p| -> Result<Vec<Stmt>, ParseError> {
            let mut stmts = Vec::new();
            while !p.check(TokenType::RBrace) && !p.check(TokenType::Eof) {
                stmts.push(p.statement()?);
            }
            Ok(stmts)
        })?;

        self.consume(TokenType::RBrace, "expected '}'")?;
        Ok(Block {
            stmts,
            span: start_span.merge(self.previous().span),
        })
    }

    /// Parse a statement
    pub(super) fn statement(&mut self) -> Result<Stmt, ParseError> {
        match self.current().ty {
            TokenType::KwLet => self.let_stmt(),
            TokenType::KwReturn => self.return_stmt(),
            TokenType::KwBreak => self.break_stmt(),
            TokenType::KwContinue => self.continue_stmt(),
            TokenType::KwWhile => self.while_stmt(),
            TokenType::KwFor => self.for_stmt(),
            TokenType::KwFn => {
                let func = self.func_def()?;
                Ok(Stmt::FuncDef(Box::new(func)))
            }
            TokenType::LBrace => Ok(Stmt::Block(self.block()?)),
            _ => self.expr_stmt(),
        }
    }

    /// `let mut? pattern (':' Type)? '=' expr ';'`
    fn let_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current().span;
        self.advance(); // consume 'let'

        let is_mut = self.match_token(TokenType::KwMut);
        let pattern = self.pattern()?;

        let ty = if self.match_token(TokenType::Colon) {
            Some(self.type_name()?)
        } else {
            None
        };

        self.consume(TokenType::Eq, "expected '=' in let statement")?;
        let value = self.expression(0)?;
        self.consume(TokenType::Semicolon, "expected ';' after let statement")?;

        let span = start_span.merge(self.previous().span);
        Ok(Stmt::Let(LetStmt {
            is_mut,
            pattern,
            ty,
            value,
            span,
        }))
    }

    fn return_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current().span;
        self.advance(); // consume 'return'

        let value = if self.check(TokenType::Semicolon) {
            None
        } else {
            Some(self.expression(0)?)
        };
        self.consume(TokenType::Semicolon, "expected ';' after return statement")?;

        let span = start_span.merge(self.previous().span);
        Ok(Stmt::Return(ReturnStmt { value, span }))
    }

    fn break_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current().span;
        self.advance(); // consume 'break'

        let value = if self.check(TokenType::Semicolon) {
            None
        } else {
            Some(self.expression(0)?)
        };
        self.consume(TokenType::Semicolon, "expected ';' after break statement")?;

        let span = start_span.merge(self.previous().span);
        Ok(Stmt::Break(BreakStmt { value, span }))
    }

    fn continue_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current().span;
        self.advance(); // consume 'continue'
        self.consume(TokenType::Semicolon, "expected ';' after continue statement")?;
        Ok(Stmt::Continue(start_span.merge(self.previous().span)))
    }

    fn while_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current().span;
        self.advance(); // consume 'while'

        let condition = self.without_struct_literals(|p| p.expression(0))?;
        let body = self.block()?;
        let span = start_span.merge(body.span);

        Ok(Stmt::While(WhileStmt {
            condition,
            body,
            span,
        }))
    }

    fn for_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current().span;
        self.advance(); // consume 'for'

        let pattern = self.pattern()?;
        self.consume(TokenType::KwIn, "expected 'in' after loop pattern")?;
        let iterable = self.without_struct_literals(|p| p.expression(0))?;
        let body = self.block()?;
        let span = start_span.merge(body.span);

        Ok(Stmt::For(ForStmt {
            pattern,
            iterable,
            body,
            span,
        }))
    }

    /// Expression statement. The semicolon is mandatory unless the
    /// expression itself ends in a brace (if/match/block), where it is
    /// merely allowed.
    fn expr_stmt(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.expression(0)?;

        let brace_ended = matches!(
            expr.kind,
            ExprKind::If(_) | ExprKind::Match(_) | ExprKind::Block(_)
        );
        if brace_ended {
            self.match_token(TokenType::Semicolon);
        } else {
            self.consume(TokenType::Semicolon, "expected ';' after expression")?;
        }

        let span = expr.span.merge(self.previous().span);
        Ok(Stmt::Expr(ExprStmt { expr, span }))
    }
}
