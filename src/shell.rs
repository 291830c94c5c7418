use arcadia_core::{Game, SortKey};
use arcadia_storefront_domain::{app::AppState, catalog::CatalogController};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Line-driven storefront shell. Every command maps onto one view
/// interaction; rendering is plain text derived from the view models.
pub async fn run(app: AppState) {
    let mut catalog = app.new_catalog();
    if let Ok(query) = std::env::var("STORE_START_QUERY") {
        catalog.seed_from_query(&query);
    }
    if let Err(err) = catalog.refresh().await {
        println!("Could not load the catalog: {} (try `retry`)", err);
    }

    println!("Arcadia storefront. Type `help` for commands.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !dispatch(&app, &mut catalog, line).await {
            break;
        }
    }
}

async fn dispatch(app: &AppState, catalog: &mut CatalogController, line: &str) -> bool {
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "quit" | "exit" => return false,
        "help" => print_help(),

        "home" => match app.home.load().await {
            Ok(page) => {
                println!("Featured:");
                print_games(&page.featured);
                println!("Top rated:");
                print_games(&page.top_rated);
            }
            Err(err) => println!("error: {}", err),
        },

        "games" => {
            let visible = catalog.visible();
            if visible.is_empty() {
                println!("No games match the current filters.");
            } else {
                print_games(&visible);
            }
        }

        "genres" | "platforms" => match catalog.load_dimensions().await {
            Ok((genres, platforms)) => {
                if command == "genres" {
                    for genre in genres {
                        println!("{:>4}  {}", genre.id, genre.name);
                    }
                } else {
                    for platform in platforms {
                        println!("{:>4}  {}", platform.id, platform.name);
                    }
                }
            }
            Err(err) => println!("error: {}", err),
        },

        "genre" => match rest {
            "off" => catalog.set_genre(None),
            _ => match rest.parse() {
                Ok(id) => catalog.set_genre(Some(id)),
                Err(_) => println!("usage: genre <id>|off"),
            },
        },

        "platform" => match rest {
            "off" => catalog.set_platform(None),
            _ => match rest.parse() {
                Ok(id) => catalog.set_platform(Some(id)),
                Err(_) => println!("usage: platform <id>|off"),
            },
        },

        "price" => {
            let parts: Vec<&str> = rest.split_whitespace().collect();
            match parts.as_slice() {
                ["min", value] => match value.parse() {
                    Ok(value) => {
                        let (min, max) = catalog.price_range_mut().set_min(value);
                        println!("price range {}..{}", min, max);
                    }
                    Err(_) => println!("usage: price min <value>"),
                },
                ["max", value] => match value.parse() {
                    Ok(value) => {
                        let (min, max) = catalog.price_range_mut().set_max(value);
                        println!("price range {}..{}", min, max);
                    }
                    Err(_) => println!("usage: price max <value>"),
                },
                [min, max] => match (min.parse(), max.parse()) {
                    (Ok(min), Ok(max)) => {
                        catalog.set_price_bounds(min, max);
                        let price = catalog.filter().price;
                        println!("price range {}..{}", price.min(), price.max());
                    }
                    _ => println!("usage: price <min> <max>"),
                },
                _ => println!("usage: price <min> <max> | price min <v> | price max <v>"),
            }
        }

        "sort" => match rest {
            "off" => catalog.set_sort(None),
            _ => match SortKey::from_id(rest) {
                Some(key) => catalog.set_sort(Some(key)),
                None => {
                    println!("usage: sort newest|oldest|price-asc|price-desc|rating|off")
                }
            },
        },

        "search" => {
            let text = if rest == "off" { "" } else { rest };
            if let Err(err) = catalog.submit_search(text).await {
                println!("error: {} (try `retry`)", err);
            } else {
                print_games(&catalog.visible());
            }
        }

        "retry" => match catalog.retry().await {
            Ok(()) => print_games(&catalog.visible()),
            Err(err) => println!("error: {}", err),
        },

        "link" => println!("?{}", catalog.query_string()),

        "open" => match rest.parse() {
            Ok(id) => {
                let detail = tokio::try_join!(
                    app.gateway.get_game(id),
                    app.gateway.reviews_for_game(id)
                );
                match detail {
                    Ok((game, reviews)) => {
                        println!("{} ({:.2})", game.title, game.price);
                        println!("{}", game.description);
                        for review in reviews {
                            println!("  [{}/5] {}", review.rating, review.comment);
                        }
                    }
                    Err(err) => println!("error: {}", err),
                }
            }
            Err(_) => println!("usage: open <game id>"),
        },

        "add" => match rest.parse() {
            Ok(id) => {
                if app.cart.add(id) {
                    println!("added game {} to the cart", id);
                } else {
                    println!("game {} is already in the cart", id);
                }
            }
            Err(_) => println!("usage: add <game id>"),
        },

        "remove" => match rest.parse() {
            Ok(id) => {
                if !app.cart.remove(id) {
                    println!("game {} is not in the cart", id);
                }
            }
            Err(_) => println!("usage: remove <game id>"),
        },

        "cart" => match app.gateway.list_games().await {
            Ok(games) => {
                for id in app.cart.items() {
                    match games.iter().find(|game| game.id == id) {
                        Some(game) => println!("{:>4}  {:<32} {:>8.2}", game.id, game.title, game.price),
                        None => println!("{:>4}  #{}", id, id),
                    }
                }
                println!("total: {:.2}", app.cart.total(&games));
            }
            Err(err) => println!("error: {}", err),
        },

        "checkout" => match app.account.current_user_id() {
            Ok(user) => match app.cart_orders.checkout(user).await {
                Ok(outcome) => {
                    for receipt in &outcome.placed {
                        println!("{} ({} at {:.2})", receipt.message, receipt.game_title, receipt.game_price);
                    }
                    for (game, err) in &outcome.failed {
                        println!("game {} was not ordered: {}", game, err);
                    }
                }
                Err(err) => println!("error: {}", err),
            },
            Err(err) => println!("error: {}", err),
        },

        "cancel" => match (app.account.current_user_id(), rest.parse()) {
            (Ok(user), Ok(game)) => match app.cart_orders.cancel_order(user, game).await {
                Ok(()) => println!("order cancelled"),
                Err(err) => println!("error: {}", err),
            },
            (Err(err), _) => println!("error: {}", err),
            (_, Err(_)) => println!("usage: cancel <game id>"),
        },

        "library" | "orders" | "reviews" => match app.account.current_user_id() {
            Ok(user) => match app.profile.load(user).await {
                Ok(profile) => match command {
                    "library" => {
                        for entry in &profile.library {
                            println!("  {}", entry.title);
                        }
                    }
                    "orders" => {
                        for view in &profile.orders {
                            println!(
                                "  {} at {:.2} on {}",
                                view.title, view.order.game_price, view.order.purchase_date
                            );
                        }
                    }
                    _ => {
                        for view in &profile.reviews {
                            println!("  {} [{}/5] {}", view.title, view.review.rating, view.review.comment);
                        }
                    }
                },
                Err(err) => println!("error: {}", err),
            },
            Err(err) => println!("error: {}", err),
        },

        "review" => {
            let parts: Vec<&str> = rest.splitn(3, ' ').collect();
            match parts.as_slice() {
                [game, rating, comment] => match (game.parse(), rating.parse(), app.account.current_user_id()) {
                    (Ok(game), Ok(rating), Ok(user)) => {
                        match app.profile.submit_review(user, game, rating, comment).await {
                            Ok(()) => println!("review submitted"),
                            Err(err) => println!("error: {}", err),
                        }
                    }
                    (_, _, Err(err)) => println!("error: {}", err),
                    _ => println!("usage: review <game id> <rating 1-5> <comment>"),
                },
                _ => println!("usage: review <game id> <rating 1-5> <comment>"),
            }
        }

        "register" => {
            let parts: Vec<&str> = rest.split_whitespace().collect();
            match parts.as_slice() {
                [name, email, password] => match app.account.register(name, email, password).await {
                    Ok(session) => println!("signed in as {}", session.user.name),
                    Err(err) => println!("error: {}", err),
                },
                _ => println!("usage: register <name> <email> <password>"),
            }
        }

        "login" => {
            let parts: Vec<&str> = rest.split_whitespace().collect();
            match parts.as_slice() {
                [name, password] => match app.account.login(name, password).await {
                    Ok(session) => println!("signed in as {}", session.user.name),
                    Err(err) => println!("error: {}", err),
                },
                _ => println!("usage: login <name> <password>"),
            }
        }

        "logout" => app.account.logout(),

        "email" => match app.account.update_email(rest).await {
            Ok(user) => println!("email updated to {}", user.email),
            Err(err) => println!("error: {}", err),
        },

        _ => println!("unknown command; type `help`"),
    }
    true
}

fn print_games(games: &[Game]) {
    for game in games {
        let rating = if game.is_rated() {
            format!("{:.1}/5", game.rating)
        } else {
            "unrated".to_string()
        };
        println!("{:>4}  {:<32} {:>8.2}  {}", game.id, game.title, game.price, rating);
    }
}

fn print_help() {
    println!("browse:   home | games | genres | platforms | open <id> | link | retry");
    println!("filter:   genre <id>|off | platform <id>|off | price <min> <max> | price min|max <v>");
    println!("          sort newest|oldest|price-asc|price-desc|rating|off | search <text>|off");
    println!("cart:     add <id> | remove <id> | cart | checkout | cancel <game id>");
    println!("profile:  library | orders | reviews | review <id> <rating> <comment> | email <new>");
    println!("account:  register <name> <email> <password> | login <name> <password> | logout");
    println!("          quit");
}
