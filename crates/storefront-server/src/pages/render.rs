//! HTML for the not-found page.
//!
//! Every interpolated value goes through `html_escape`; slugs are also
//! percent-encoded since they become a path segment.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use storefront_core::{join_price, ProductSummary};

use super::not_found::NotFoundPage;

/// Unreserved URL characters stay readable in product links.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub(super) fn not_found_page(page: &NotFoundPage) -> String {
    let tr = &page.translator;
    let locale = page.locale.code();

    let products = if page.products.is_empty() {
        String::new()
    } else {
        product_section(tr.t("productsTitle"), &page.products)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="{locale}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="robots" content="noindex">
<title>{title} | {heading}</title>
</head>
<body>
<main class="not-found">
<section class="not-found-message">
<h1>{title}</h1>
<h2>{heading}</h2>
<p>{description}</p>
<a href="/{locale}"><button type="button">{button}</button></a>
</section>
{products}</main>
</body>
</html>
"#,
        title = text(tr.t("title")),
        heading = text(tr.t("heading")),
        description = text(tr.t("description")),
        button = text(tr.t("button")),
    )
}

fn product_section(heading: &str, products: &[ProductSummary]) -> String {
    let cards: String = products
        .iter()
        .enumerate()
        .map(|(index, product)| product_card(index, product))
        .collect();

    format!(
        "<section class=\"products\">\n<h3>{heading}</h3>\n<div class=\"product-grid\">\n{cards}</div>\n</section>\n",
        heading = text(heading),
    )
}

fn product_card(index: usize, product: &ProductSummary) -> String {
    let key = product
        .id
        .as_ref()
        .map_or_else(|| index.to_string(), ToString::to_string);
    let name = product.name.as_deref().unwrap_or_default();
    let slug = product.slug.as_deref().unwrap_or_default();
    let href = format!("/product/{}", utf8_percent_encode(slug, PATH_SEGMENT));

    let mut card = format!(
        "<a class=\"product-card\" href=\"{href}\" data-product-id=\"{key}\">\n",
        href = attr(&href),
        key = attr(&key),
    );
    if let Some(img) = product.thumbnail.as_deref() {
        card.push_str(&format!(
            "<img src=\"{src}\" alt=\"{alt}\" loading=\"lazy\">\n",
            src = attr(img),
            alt = attr(name),
        ));
    }
    card.push_str(&format!("<h4 class=\"product-name\">{}</h4>\n", text(name)));
    if let Some(category) = product.subcategory_name() {
        card.push_str(&format!(
            "<p class=\"product-category\">{}</p>\n",
            text(category)
        ));
    }
    if let Some(price) = join_price(&product.stocks) {
        card.push_str(&format!("<p class=\"product-price\">{}</p>\n", text(&price)));
    }
    card.push_str("</a>\n");
    card
}
