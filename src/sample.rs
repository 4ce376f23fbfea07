use maud::{DOCTYPE, Markup, PreEscaped, html};

pub const SAMPLE_CSS: &str = include_str!("sample.css");

/// Small machine-management page carrying one of everything the
/// behaviors react to: the theme toggle control, guarded links with and
/// without a custom message, and a guarded form submit.
pub fn build_sample_page() -> String {
    let markup: Markup = html! {
        (DOCTYPE)
        html lang="pt" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light dark";
                title { "Painel de produção" }
                style { (PreEscaped(SAMPLE_CSS)) }
            }
            body class="pb" {
                header class="pb-topbar" {
                    div class="pb-container pb-topbar-inner" {
                        h1 { "Painel de produção" }
                        button type="button" id="theme-toggle" class="pb-btn" { "Tema" }
                    }
                }
                main class="pb-container pb-main" {
                    table class="pb-table" {
                        thead {
                            tr {
                                th { "Máquina" }
                                th { "Status" }
                                th { }
                            }
                        }
                        tbody {
                            tr {
                                td { "Extrusora 01" }
                                td { "ativa" }
                                td {
                                    a class="pb-link" href="/machines/1/edit" { "Editar" }
                                    " "
                                    a class="pb-link pb-danger"
                                        href="/machines/1/delete"
                                        data-confirm
                                        data-confirm-message="Excluir a máquina Extrusora 01?" {
                                        "Excluir"
                                    }
                                }
                            }
                            tr {
                                td { "Prensa 02" }
                                td { "parada" }
                                td {
                                    a class="pb-link" href="/machines/2/edit" { "Editar" }
                                    " "
                                    a class="pb-link pb-danger" href="/machines/2/delete" data-confirm {
                                        "Excluir"
                                    }
                                }
                            }
                        }
                    }
                    form class="pb-reset" action="/machines/reset" method="post" {
                        button type="submit" class="pb-btn pb-danger"
                            data-confirm
                            data-confirm-message="Zerar todos os contadores?" {
                            "Zerar contadores"
                        }
                    }
                }
                footer class="pb-footer" {
                    div class="pb-container" { "page-behaviors demo" }
                }
            }
        }
    };
    markup.into_string()
}
