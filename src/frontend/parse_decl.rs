// src/frontend/parse_decl.rs
//
// Item parsing: functions, structs, enums, traits, impl blocks, trait
// impls, type aliases, and top-level statements.

use crate::errors::ParserError;
use crate::frontend::ast::*;
use crate::frontend::parser::{ParseError, Parser};
use crate::frontend::{Span, TokenType};

impl<'src> Parser<'src> {
    pub(super) fn item(&mut self) -> Result<Item, ParseError> {
        match self.current().ty {
            TokenType::KwFn => Ok(Item::Func(self.func_def()?)),
            TokenType::KwStruct => self.struct_def(),
            TokenType::KwEnum => self.enum_def(),
            TokenType::KwTrait => self.trait_def(),
            TokenType::KwImpl => self.impl_item(),
            TokenType::KwType => self.type_alias(),
            TokenType::Error => Err(self.invalid_literal()),
            // Anything else is a top-level statement (let, expression, loop)
            _ => Ok(Item::Statement(self.statement()?)),
        }
    }

    /// `fn name<T>(params): Ret { body }`
    pub(super) fn func_def(&mut self) -> Result<FuncDef, ParseError> {
        let start_span = self.current().span;
        self.advance(); // consume 'fn'

        let decl = self.func_decl_after_fn(start_span)?;
        let body = self.block()?;
        let span = start_span.merge(body.span);

        Ok(FuncDef { decl, body, span })
    }

    /// The signature part shared by function definitions and trait
    /// method signatures; 'fn' has already been consumed.
    fn func_decl_after_fn(&mut self, start_span: Span) -> Result<FuncDecl, ParseError> {
        let name_token = self.current().clone();
        self.consume(TokenType::Identifier, "expected function name")?;
        let name = self.interner.intern(&name_token.lexeme);

        let type_params = self.type_params()?;

        self.consume(TokenType::LParen, "expected '(' after function name")?;
        let mut params = Vec::new();
        if !self.check(TokenType::RParen) {
            loop {
                params.push(self.func_param()?);
                if !self.match_token(TokenType::Comma) {
                    break;
                }
                // Allow trailing comma
                if self.check(TokenType::RParen) {
                    break;
                }
            }
        }
        self.consume(TokenType::RParen, "expected ')' after parameters")?;

        let return_type = if self.match_token(TokenType::Colon) {
            Some(self.type_name()?)
        } else {
            None
        };

        Ok(FuncDecl {
            name,
            name_span: name_token.span,
            type_params,
            params,
            return_type,
            span: start_span.merge(self.previous().span),
        })
    }

    /// `name (':' Type)?` - the annotation is optional so a bare `self`
    /// receiver can head an impl-block method's parameter list.
    fn func_param(&mut self) -> Result<FuncParam, ParseError> {
        let name_token = self.current().clone();
        self.consume(TokenType::Identifier, "expected parameter name")?;
        let name = self.interner.intern(&name_token.lexeme);

        let ty = if self.match_token(TokenType::Colon) {
            Some(self.type_name()?)
        } else {
            None
        };

        Ok(FuncParam {
            name,
            ty,
            span: name_token.span.merge(self.previous().span),
        })
    }

    fn struct_def(&mut self) -> Result<Item, ParseError> {
        let start_span = self.current().span;
        self.advance(); // consume 'struct'

        let name_token = self.current().clone();
        self.consume(TokenType::Identifier, "expected struct name")?;
        let name = self.interner.intern(&name_token.lexeme);

        let type_params = self.type_params()?;

        self.consume(TokenType::LBrace, "expected '{' after struct name")?;
        let fields = self.struct_fields()?;
        self.consume(TokenType::RBrace, "expected '}' to close struct")?;

        Ok(Item::Struct(StructDef {
            name,
            type_params,
            fields,
            span: start_span.merge(self.previous().span),
        }))
    }

    /// Comma-separated `name: Type` fields with optional trailing comma,
    /// shared by struct bodies and struct-shaped enum variants.
    fn struct_fields(&mut self) -> Result<Vec<StructField>, ParseError> {
        let mut fields = Vec::new();
        while !self.check(TokenType::RBrace) && !self.check(TokenType::Eof) {
            let name_token = self.current().clone();
            self.consume(TokenType::Identifier, "expected field name")?;
            let name = self.interner.intern(&name_token.lexeme);

            self.consume(TokenType::Colon, "expected ':' after field name")?;
            let ty = self.type_name()?;

            fields.push(StructField {
                name,
                ty,
                span: name_token.span.merge(self.previous().span),
            });

            if !self.match_token(TokenType::Comma) {
                break;
            }
        }
        Ok(fields)
    }

    fn enum_def(&mut self) -> Result<Item, ParseError> {
        let start_span = self.current().span;
        self.advance(); // consume 'enum'

        let name_token = self.current().clone();
        self.consume(TokenType::Identifier, "expected enum name")?;
        let name = self.interner.intern(&name_token.lexeme);

        let type_params = self.type_params()?;

        self.consume(TokenType::LBrace, "expected '{' after enum name")?;

        let mut variants = Vec::new();
        while !self.check(TokenType::RBrace) && !self.check(TokenType::Eof) {
            variants.push(self.enum_variant()?);
            if !self.match_token(TokenType::Comma) {
                break;
            }
        }

        self.consume(TokenType::RBrace, "expected '}' to close enum")?;

        Ok(Item::Enum(EnumDef {
            name,
            type_params,
            variants,
            span: start_span.merge(self.previous().span),
        }))
    }

    /// Unit (`Name`), tuple (`Name(T, U)`), and struct-shaped
    /// (`Name { f: T }`) variants mix freely within one enum.
    fn enum_variant(&mut self) -> Result<EnumVariant, ParseError> {
        let name_token = self.current().clone();
        self.consume(TokenType::Identifier, "expected enum variant name")?;
        let name = self.interner.intern(&name_token.lexeme);

        let kind = if self.match_token(TokenType::LParen) {
            let mut types = Vec::new();
            if !self.check(TokenType::RParen) {
                loop {
                    types.push(self.type_name()?);
                    if !self.match_token(TokenType::Comma) {
                        break;
                    }
                    if self.check(TokenType::RParen) {
                        break;
                    }
                }
            }
            self.consume(TokenType::RParen, "expected ')' after variant types")?;
            EnumVariantKind::Tuple(types)
        } else if self.match_token(TokenType::LBrace) {
            let fields = self.struct_fields()?;
            self.consume(TokenType::RBrace, "expected '}' after variant fields")?;
            EnumVariantKind::Struct(fields)
        } else {
            EnumVariantKind::Unit
        };

        Ok(EnumVariant {
            name,
            kind,
            span: name_token.span.merge(self.previous().span),
        })
    }

    /// `trait Name<T> { type Assoc: Bound; fn method(self): T; }`
    fn trait_def(&mut self) -> Result<Item, ParseError> {
        let start_span = self.current().span;
        self.advance(); // consume 'trait'

        let name_token = self.current().clone();
        self.consume(TokenType::Identifier, "expected trait name")?;
        let name = self.interner.intern(&name_token.lexeme);

        let type_params = self.type_params()?;

        self.consume(TokenType::LBrace, "expected '{' after trait name")?;

        let mut associated_types = Vec::new();
        let mut methods = Vec::new();
        while !self.check(TokenType::RBrace) && !self.check(TokenType::Eof) {
            if self.check(TokenType::KwType) {
                let assoc_start = self.current().span;
                self.advance();
                let assoc_name_token = self.current().clone();
                self.consume(TokenType::Identifier, "expected associated type name")?;
                let assoc_name = self.interner.intern(&assoc_name_token.lexeme);

                let bounds = if self.match_token(TokenType::Colon) {
                    self.bound_list()?
                } else {
                    Vec::new()
                };
                self.consume(TokenType::Semicolon, "expected ';' after associated type")?;

                associated_types.push(AssociatedType {
                    name: assoc_name,
                    bounds,
                    span: assoc_start.merge(self.previous().span),
                });
            } else if self.check(TokenType::KwFn) {
                let sig_start = self.current().span;
                self.advance();
                let sig = self.func_decl_after_fn(sig_start)?;
                self.consume(TokenType::Semicolon, "expected ';' after method signature")?;
                methods.push(sig);
            } else {
                return Err(ParseError::new(
                    ParserError::ExpectedToken {
                        expected: "trait member ('fn' or 'type')".to_string(),
                        found: self.current().ty.as_str().to_string(),
                        span: self.current().span.into(),
                    },
                    self.current().span,
                ));
            }
        }

        self.consume(TokenType::RBrace, "expected '}' to close trait")?;

        Ok(Item::Trait(TraitDef {
            name,
            type_params,
            associated_types,
            methods,
            span: start_span.merge(self.previous().span),
        }))
    }

    /// `impl<T> Type { fn.. }` or `impl<T> Trait for Type { type A = B; fn.. }`
    fn impl_item(&mut self) -> Result<Item, ParseError> {
        let start_span = self.current().span;
        self.advance(); // consume 'impl'

        let type_params = self.type_params()?;
        let first = self.type_name()?;

        if self.match_token(TokenType::KwFor) {
            let self_type = self.type_name()?;
            self.consume(TokenType::LBrace, "expected '{' after impl target")?;

            let mut associated_types = Vec::new();
            let mut methods = Vec::new();
            while !self.check(TokenType::RBrace) && !self.check(TokenType::Eof) {
                if self.check(TokenType::KwType) {
                    let binding_start = self.current().span;
                    self.advance();
                    let name_token = self.current().clone();
                    self.consume(TokenType::Identifier, "expected associated type name")?;
                    let name = self.interner.intern(&name_token.lexeme);

                    self.consume(TokenType::Eq, "expected '=' in associated type binding")?;
                    let ty = self.type_name()?;
                    self.consume(TokenType::Semicolon, "expected ';' after associated type binding")?;

                    associated_types.push(AssociatedTypeBinding {
                        name,
                        ty,
                        span: binding_start.merge(self.previous().span),
                    });
                } else if self.check(TokenType::KwFn) {
                    methods.push(self.func_def()?);
                } else {
                    return Err(ParseError::new(
                        ParserError::ExpectedToken {
                            expected: "associated type binding or method".to_string(),
                            found: self.current().ty.as_str().to_string(),
                            span: self.current().span.into(),
                        },
                        self.current().span,
                    ));
                }
            }

            self.consume(TokenType::RBrace, "expected '}' to close impl")?;

            return Ok(Item::TraitImpl(TraitImpl {
                type_params,
                trait_name: first,
                self_type,
                associated_types,
                methods,
                span: start_span.merge(self.previous().span),
            }));
        }

        self.consume(TokenType::LBrace, "expected '{' after impl type")?;

        let mut methods = Vec::new();
        while !self.check(TokenType::RBrace) && !self.check(TokenType::Eof) {
            if self.check(TokenType::KwFn) {
                methods.push(self.func_def()?);
            } else {
                return Err(ParseError::new(
                    ParserError::ExpectedToken {
                        expected: "method definition".to_string(),
                        found: self.current().ty.as_str().to_string(),
                        span: self.current().span.into(),
                    },
                    self.current().span,
                ));
            }
        }

        self.consume(TokenType::RBrace, "expected '}' to close impl")?;

        Ok(Item::Impl(ImplBlock {
            type_params,
            self_type: first,
            methods,
            span: start_span.merge(self.previous().span),
        }))
    }

    /// `type Name<T> = Aliased;`
    fn type_alias(&mut self) -> Result<Item, ParseError> {
        let start_span = self.current().span;
        self.advance(); // consume 'type'

        let name_token = self.current().clone();
        self.consume(TokenType::Identifier, "expected type alias name")?;
        let name = self.interner.intern(&name_token.lexeme);

        let type_params = self.type_params()?;

        self.consume(TokenType::Eq, "expected '=' in type alias")?;
        let aliased = self.type_name()?;
        self.consume(TokenType::Semicolon, "expected ';' after type alias")?;

        Ok(Item::TypeAlias(TypeAlias {
            name,
            type_params,
            aliased,
            span: start_span.merge(self.previous().span),
        }))
    }
}
