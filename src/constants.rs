/// Body of the greeting returned by `GET /`
pub const GREETING_MESSAGE: &str = "Olá, mundo!";

/// Default address the HTTP server binds to
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port the HTTP server listens on
pub const DEFAULT_PORT: u16 = 3000;

/// Default SQLite database file, overridden by `DATABASE_PATH`
pub const DEFAULT_DATABASE_PATH: &str = "dealership.db";

/// Maximum number of pooled SQLite connections
pub const DEFAULT_POOL_SIZE: u32 = 8;

/// How long a request waits for a pooled connection
pub const DEFAULT_CONNECTION_TIMEOUT: &str = "30s";

/// Directory receiving the rotating log files
pub const DEFAULT_LOG_DIRECTORY: &str = "logs";

/// SQLite path that keeps the whole database in memory
pub const IN_MEMORY_DATABASE: &str = ":memory:";

/// Answer for unknown paths and methods a route does not handle
pub const UNSUPPORTED_REQUEST: &str = "Rota ou método não suportado";

pub const CAR_LIST_FAILED: &str = "Não foi possível acessar a listagem de carros";
pub const CAR_CREATED: &str = "Carro cadastrado com sucesso!";
pub const CAR_NOT_CREATED: &str =
    "Erro ao cadastrar o carro. Entre em contato com o administrador do sistema.";
pub const CAR_CREATE_FAILED: &str =
    "Não foi possível cadastrar o carro. Entre em contato com o administrador do sistema.";
pub const CAR_REMOVED: &str = "Carro removido com sucesso!";
pub const CAR_NOT_REMOVED: &str =
    "Erro ao remover o carro. Entre em contato com o administrador do sistema.";
pub const CAR_REMOVE_FAILED: &str =
    "Não foi possível remover o carro. Entre em contato com o administrador do sistema.";
pub const CAR_UPDATED: &str = "Carro atualizado com sucesso!";
pub const CAR_NOT_UPDATED: &str =
    "Erro ao atualizar o carro. Entre em contato com o administrador do sistema.";
pub const CAR_UPDATE_FAILED: &str =
    "Não foi possível atualizar o carro. Entre em contato com o administrador do sistema.";

pub const CLIENT_LIST_FAILED: &str = "Não foi possível acessar a listagem de cliente";
pub const CLIENT_CREATED: &str = "Cliente cadastrado com sucesso!";
pub const CLIENT_NOT_CREATED: &str =
    "Erro ao cadastrar o cliente. Entre em contato com o administrador do sistema.";
pub const CLIENT_CREATE_FAILED: &str =
    "Não foi possível cadastrar o cliente. Entre em contato com o administrador do sistema.";
pub const CLIENT_REMOVED: &str = "Cliente removido com sucesso!";
pub const CLIENT_NOT_REMOVED: &str =
    "Erro ao remover o cliente. Entre em contato com o administrador do sistema.";
pub const CLIENT_REMOVE_FAILED: &str =
    "Não foi possível remover o cliente. Entre em contato com o administrador do sistema.";
pub const CLIENT_UPDATED: &str = "Cliente atualizado com sucesso!";
pub const CLIENT_NOT_UPDATED: &str =
    "Erro ao atualizar o cliente. Entre em contato com o administrador do sistema.";
pub const CLIENT_UPDATE_FAILED: &str =
    "Não foi possível atualizar o cliente. Entre em contato com o administrador do sistema.";

pub const ORDER_LIST_FAILED: &str = "Não foi possível acessar a listagem de pedidos";
pub const ORDER_CREATED: &str = "Pedido cadastrado com sucesso!";
pub const ORDER_NOT_CREATED: &str =
    "Erro ao cadastrar o pedido. Entre em contato com o administrador do sistema.";
pub const ORDER_CREATE_FAILED: &str =
    "Não foi possível cadastrar o pedido. Entre em contato com o administrador do sistema.";
pub const ORDER_REMOVED: &str = "Pedido removido com sucesso!";
pub const ORDER_NOT_REMOVED: &str =
    "Erro ao remover o pedido. Entre em contato com o administrador do sistema.";
pub const ORDER_REMOVE_FAILED: &str =
    "Não foi possível remover o pedido. Entre em contato com o administrador do sistema.";
pub const ORDER_UPDATED: &str = "Pedido atualizado com sucesso!";
pub const ORDER_NOT_UPDATED: &str =
    "Erro ao atualizar o pedido. Entre em contato com o administrador do sistema.";
pub const ORDER_UPDATE_FAILED: &str =
    "Não foi possível atualizar o pedido. Entre em contato com o administrador do sistema.";
