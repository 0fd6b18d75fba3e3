pub fn get_internal_password() -> &'static str {
    "vert-mesa-de-controle"
}

pub fn get_contact_url() -> &'static str {
    "https://ig.me/m/vertgroupbrasil"
}

pub fn get_instagram_url() -> &'static str {
    "https://instagram.com/vertgroupbrasil"
}
