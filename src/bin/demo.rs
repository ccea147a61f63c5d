use curlconvert::convert_to_display;

fn main() {
    let curl_command = "curl 'http://example.com/search?q=rust' \\\n  -H 'Accept: application/json' \\\n  -b 'sid=abc; lang=en' \\\n  --data-raw '{\"page\":1}'";
    println!("{}", convert_to_display(curl_command));
    println!();
    println!("{}", convert_to_display("curl -H 'Accept: */*'"));
}
