//! Middleware modules imported by every route manifest.
//!
//! Both are created once; a project is expected to replace the token and
//! role checks with its own.

use std::path::{Path, PathBuf};

use apigen_core::{FileRules, GeneratedFile};

use crate::{
    ast::Import,
    code_file::{CodeFile, RawCode},
};

/// `middlewares/auth.middleware.js`: `verifyToken` and `isAdmin`.
pub struct AuthMiddleware;

impl GeneratedFile for AuthMiddleware {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("middlewares").join("auth.middleware.js")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .import(Import::new("jsonwebtoken").default("jwt"))
            .add(RawCode::new(
                "export const verifyToken = (req, res, next) => {
  const header = req.headers.authorization || '';
  const token = header.startsWith('Bearer ') ? header.slice(7) : null;
  if (!token) return res.status(401).json({ message: 'No token provided' });

  try {
    req.user = jwt.verify(token, process.env.JWT_SECRET);
    next();
  } catch (err) {
    res.status(401).json({ message: 'Invalid token' });
  }
};",
            ))
            .add(RawCode::new(
                "export const isAdmin = (req, res, next) => {
  if (req.user?.role !== 'admin') {
    return res.status(403).json({ message: 'Admin access required' });
  }
  next();
};",
            ))
            .render()
    }
}

/// `middlewares/validate.middleware.js`: rejects bodies failing a Joi schema.
pub struct ValidateMiddleware;

impl GeneratedFile for ValidateMiddleware {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("middlewares").join("validate.middleware.js")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .add(RawCode::new(
                "const validate = (schema) => (req, res, next) => {
  const { error } = schema.validate(req.body);
  if (error) return res.status(400).json({ message: error.details[0].message });
  next();
};",
            ))
            .add(RawCode::new("export default validate;"))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_exports_route_guards() {
        let content = AuthMiddleware.render();
        assert!(content.starts_with("import jwt from 'jsonwebtoken';\n\n"));
        assert!(content.contains("export const verifyToken = (req, res, next) => {\n"));
        assert!(content.contains("export const isAdmin = (req, res, next) => {\n"));
        assert!(content.contains("\n\n  try {\n"));
    }

    #[test]
    fn test_validate_default_export() {
        let content = ValidateMiddleware.render();
        assert!(content.ends_with("};\n\nexport default validate;\n"));
    }

    #[test]
    fn test_paths() {
        let base = Path::new("api");
        assert_eq!(
            AuthMiddleware.path(base),
            Path::new("api/middlewares/auth.middleware.js")
        );
        assert_eq!(
            ValidateMiddleware.path(base),
            Path::new("api/middlewares/validate.middleware.js")
        );
    }
}
