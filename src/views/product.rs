// src/views/product.rs
use super::{escape, layout};
use crate::models::product::Product;

pub fn index_page(products: &[Product]) -> String {
    let mut rows = String::new();
    for product in products {
        rows.push_str(&format!(
            r#"      <tr>
        <td><a href="/products/{id}">{name}</a></td>
        <td>{code}</td>
        <td>{price:.2}</td>
        <td><a href="/products/{id}/edit">Edit</a></td>
      </tr>
"#,
            id = product.id,
            name = escape(&product.name),
            code = escape(&product.code),
            price = product.price,
        ));
    }
    let body = format!(
        r#"  <h1>Products</h1>
  <table>
    <thead>
      <tr><th>Name</th><th>Code</th><th>Price</th><th></th></tr>
    </thead>
    <tbody>
{rows}    </tbody>
  </table>
  <p><a href="/products/new">New product</a></p>"#,
    );
    layout("Products", &body)
}

pub fn show_page(product: &Product) -> String {
    let body = format!(
        r#"  <h1>{name}</h1>
  <p><strong>Code:</strong> {code}</p>
  <p><strong>Price:</strong> {price:.2}</p>
  <p>
    <a href="/products/{id}/edit">Edit</a> |
    <a href="/products">Back to products</a>
  </p>"#,
        id = product.id,
        name = escape(&product.name),
        code = escape(&product.code),
        price = product.price,
    );
    layout(&product.name, &body)
}

pub fn new_page() -> String {
    let body = form("New product", "/products", "POST", "", "", "");
    layout("New product", &body)
}

pub fn edit_page(product: &Product) -> String {
    let action = format!("/products/{}", product.id);
    let body = form(
        "Edit product",
        &action,
        "PATCH",
        &escape(&product.name),
        &escape(&product.code),
        &format!("{:.2}", product.price),
    );
    layout("Edit product", &body)
}

// The form posts its fields as the JSON body the API accepts, nested
// under the `product` key.
fn form(heading: &str, action: &str, method: &str, name: &str, code: &str, price: &str) -> String {
    format!(
        r#"  <h1>{heading}</h1>
  <form id="product-form" data-action="{action}" data-method="{method}">
    <label>Name <input name="name" value="{name}"></label>
    <label>Code <input name="code" value="{code}"></label>
    <label>Price <input name="price" type="number" step="0.01" min="0" value="{price}"></label>
    <button type="submit">Save</button>
  </form>
  <p id="form-error" class="error"></p>
  <p><a href="/products">Back to products</a></p>
  <script>
    document.getElementById('product-form').addEventListener('submit', async (event) => {{
      event.preventDefault();
      const form = event.target;
      const product = {{}};
      for (const [key, value] of new FormData(form)) {{
        if (value !== '') product[key] = key === 'price' ? Number(value) : value;
      }}
      const response = await fetch(form.dataset.action, {{
        method: form.dataset.method,
        headers: {{ 'Content-Type': 'application/json', 'Accept': 'application/json' }},
        body: JSON.stringify({{ product }})
      }});
      if (response.ok) {{
        const body = await response.json();
        window.location = '/products/' + body.id;
      }} else {{
        const body = await response.json().catch(() => ({{ error: response.statusText }}));
        document.getElementById('form-error').textContent = body.error;
      }}
    }});
  </script>"#,
    )
}
