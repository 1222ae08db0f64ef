//! One-shot status message carried across a redirect in a cookie.
//!
//! The cookie holds a short code, not the message text; the list view turns it
//! into the message and removes the cookie in the same response.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use service::auto::domain::SaveOutcome;

pub const FLASH_COOKIE: &str = "mensaje";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    Created,
    Updated,
    Deleted,
}

impl Flash {
    pub fn code(self) -> &'static str {
        match self {
            Flash::Created => "creado",
            Flash::Updated => "actualizado",
            Flash::Deleted => "borrado",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "creado" => Some(Flash::Created),
            "actualizado" => Some(Flash::Updated),
            "borrado" => Some(Flash::Deleted),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Flash::Created => "Auto creado exitosamente",
            Flash::Updated => "Auto actualizado exitosamente",
            Flash::Deleted => "Auto borrado exitosamente",
        }
    }
}

impl From<SaveOutcome> for Flash {
    fn from(outcome: SaveOutcome) -> Self {
        match outcome {
            SaveOutcome::Created => Flash::Created,
            SaveOutcome::Updated => Flash::Updated,
        }
    }
}

/// Attach a flash to the outgoing response.
pub fn set(jar: CookieJar, flash: Flash) -> CookieJar {
    jar.add(Cookie::build((FLASH_COOKIE, flash.code())).path("/").http_only(true))
}

/// Read the pending flash, if any, and schedule its removal.
pub fn take(jar: CookieJar) -> (CookieJar, Option<&'static str>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else { return (jar, None) };
    let message = Flash::from_code(cookie.value()).map(Flash::message);
    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_for_every_flash() {
        for f in [Flash::Created, Flash::Updated, Flash::Deleted] {
            assert_eq!(Flash::from_code(f.code()), Some(f));
        }
        assert_eq!(Flash::from_code("<script>"), None);
    }

    #[test]
    fn take_consumes_once() {
        let jar = CookieJar::new().add(Cookie::new(FLASH_COOKIE, "borrado"));
        let (jar, msg) = take(jar);
        assert_eq!(msg, Some("Auto borrado exitosamente"));
        assert!(jar.get(FLASH_COOKIE).is_none());

        let (_, again) = take(jar);
        assert_eq!(again, None);
    }

    #[test]
    fn unknown_code_is_dropped_silently() {
        let jar = CookieJar::new().add(Cookie::new(FLASH_COOKIE, "whatever"));
        let (jar, msg) = take(jar);
        assert_eq!(msg, None);
        assert!(jar.get(FLASH_COOKIE).is_none());
    }
}
