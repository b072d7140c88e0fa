//! Page fixtures shaped like the shop templates.

pub(crate) const HOME_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Home | Florida Alignment &amp; Suspension</title>
</head>
<body>
<header>
  <span data-config-text="businessName">Florida Alignment &amp; Suspension</span>
  <a href="tel:5551234567" data-config-href="tel">Call us</a>
</header>
<main>
  <a href="#" data-config-map-link="q">Find us</a>
  <a href="#" data-config-map-link="directions">Directions</a>
  <form action="#" data-config-mailto>
    <input name="message">
  </form>
</main>
<footer>
  &copy; <span data-config-year>2024</span>
  <a href="mailto:info@floridaalignment.com" data-config-href="mailto">Email</a>
</footer>
</body>
</html>
"##;

pub(crate) const PLAIN_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>About us</title></head><body><p>No markers here.</p></body></html>
"#;

pub(crate) const SETTINGS: &str = r#"[business]
name = "Acme Auto"
phone = "(407) 555-0100"
email = "service@acme.test"
address = "9 Elm St, Tampa, FL"

[binding]
current_year = "2031"

[text]
tagline = "Straight and true"
"#;
