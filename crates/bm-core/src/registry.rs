//! The token collection: CRUD plus positional updates, with generated
//! identity.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{BmError, BmResult};
use crate::geometry::ScenePoint;
use crate::token::{self, Token, TokenId};

/// Owns every token placed in a session.
///
/// Insertion order is preserved and doubles as the z-order for rendering:
/// the oldest token draws first (bottom), the newest last (top). Tokens are
/// looked up by the id generated at creation; no two tokens ever share one,
/// and ids are never reused after removal.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    tokens: HashMap<TokenId, Token>,
    order: Vec<TokenId>,
}

impl TokenRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a token and append it to the top of the z-order.
    ///
    /// Attribute values outside their declared ranges are rejected with
    /// [`BmError::InvalidAttribute`] and nothing is stored. Returns a copy
    /// of the stored record, id included.
    pub fn add(
        &mut self,
        sprite_path: impl Into<PathBuf>,
        name: impl Into<String>,
        hit_points: i32,
        armor_class: i32,
        position: ScenePoint,
    ) -> BmResult<Token> {
        token::validate_hit_points(hit_points)?;
        token::validate_armor_class(armor_class)?;
        let token = Token {
            id: TokenId::new(),
            sprite_path: sprite_path.into(),
            name: name.into(),
            hit_points,
            armor_class,
            position,
        };
        self.order.push(token.id);
        self.tokens.insert(token.id, token.clone());
        Ok(token)
    }

    /// Look up a token by id.
    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(&id)
    }

    fn get_mut(&mut self, id: TokenId) -> BmResult<&mut Token> {
        self.tokens.get_mut(&id).ok_or(BmError::TokenNotFound(id))
    }

    /// Rename a token. The name is free text; empty is allowed.
    pub fn rename(&mut self, id: TokenId, name: impl Into<String>) -> BmResult<()> {
        self.get_mut(id)?.name = name.into();
        Ok(())
    }

    /// Set a token's hit points, enforcing the creation-time range.
    pub fn set_hit_points(&mut self, id: TokenId, value: i32) -> BmResult<()> {
        let entry = self.get_mut(id)?;
        token::validate_hit_points(value)?;
        entry.hit_points = value;
        Ok(())
    }

    /// Set a token's armor class, enforcing the creation-time range.
    pub fn set_armor_class(&mut self, id: TokenId, value: i32) -> BmResult<()> {
        let entry = self.get_mut(id)?;
        token::validate_armor_class(value)?;
        entry.armor_class = value;
        Ok(())
    }

    /// Move a token to a new scene position.
    pub fn move_to(&mut self, id: TokenId, position: ScenePoint) -> BmResult<()> {
        self.get_mut(id)?.position = position;
        Ok(())
    }

    /// Remove a token, returning the removed record.
    pub fn remove(&mut self, id: TokenId) -> BmResult<Token> {
        let token = self
            .tokens
            .remove(&id)
            .ok_or(BmError::TokenNotFound(id))?;
        self.order.retain(|tid| *tid != id);
        Ok(token)
    }

    /// Iterate over tokens in z-order (insertion order, oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.order.iter().filter_map(|id| self.tokens.get(id))
    }

    /// Number of tokens in the registry.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Return `true` if the registry holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether a token with this id exists.
    pub fn contains(&self, id: TokenId) -> bool {
        self.tokens.contains_key(&id)
    }
}
